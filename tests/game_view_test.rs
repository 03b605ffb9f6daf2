//! Pure-view rendering tests

use versus_tetris::core::Game;
use versus_tetris::term::GameView;
use versus_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_render_is_stable_for_identical_state() {
    let game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 4).unwrap();
    let view = GameView;
    assert_eq!(view.render(&game), view.render(&game));
}

#[test]
fn test_render_survives_every_seed_start() {
    let view = GameView;
    for seed in 1..30 {
        let game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, seed).unwrap();
        let frame = view.render(&game);
        assert_eq!(frame.len(), BOARD_HEIGHT as usize + 2);
    }
}

#[test]
fn test_render_small_board() {
    let game = Game::new(6, 6, 2).unwrap();
    let frame = GameView.render(&game);
    assert_eq!(frame.len(), 8);
    // Border width follows the board width.
    assert!(frame[0].starts_with("+------------+"));
}

#[test]
fn test_game_over_banner_appears() {
    let mut game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 8).unwrap();
    let mut guard = 0;
    while !game.is_game_over() {
        game.move_down();
        guard += 1;
        assert!(guard < 2000);
    }
    let joined = GameView.render(&game).join("\n");
    assert!(joined.contains("GAME OVER"));
}

#[test]
fn test_render_through_a_whole_game() {
    // Render after every lock from fresh board to game over; the view must
    // never panic, whatever the stack looks like.
    let mut game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 21).unwrap();
    let view = GameView;
    let mut guard = 0;
    while !game.is_game_over() {
        while game.move_down() {}
        view.render(&game);
        guard += 1;
        assert!(guard < 300);
    }
}
