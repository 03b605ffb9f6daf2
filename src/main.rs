//! Terminal game runner (default binary).
//!
//! Owns the repeating drop timer: the engine is driven by invoking
//! `move_down` once per drop interval and holds no timing state itself.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use versus_tetris::core::Game;
use versus_tetris::input;
use versus_tetris::term::{GameView, TerminalRenderer};
use versus_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn drop_duration(interval_ms: u32) -> Duration {
    // A zero interval (level five and up) would spin the poll loop; one
    // millisecond is as fast as a terminal can usefully tick anyway.
    Duration::from_millis(interval_ms.max(1) as u64)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView;
    let mut game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, clock_seed())?;
    let mut interval = drop_duration(game.drop_interval_ms());
    let mut next_drop = Instant::now() + interval;

    term.draw(&view.render(&game))?;

    loop {
        let timeout = next_drop.saturating_duration_since(Instant::now());
        let mut dirty = false;

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if input::should_quit(key) {
                        return Ok(());
                    }
                    if input::should_restart(key) {
                        // Restart discards the whole game and rebuilds it.
                        game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, clock_seed())?;
                        interval = drop_duration(game.drop_interval_ms());
                        next_drop = Instant::now() + interval;
                        dirty = true;
                    } else if let Some(command) = input::map_key(key) {
                        // A successful move is the signal to redraw.
                        dirty |= game.apply(command);
                    }
                }
            }
        }

        // Gravity tick. After game over there is nothing to drive; stopping
        // the timer is simply not invoking it.
        if Instant::now() >= next_drop {
            if !game.is_game_over() {
                game.move_down();
                dirty = true;
            }
            next_drop = Instant::now() + interval;
        }

        // A lock redraws the whole board and may change the drop speed.
        if let Some(lock) = game.take_lock_event() {
            dirty = true;
            if let Some(change) = lock.level_change {
                interval = drop_duration(change.drop_interval_ms);
            }
        }

        if dirty {
            term.draw(&view.render(&game))?;
        }
    }
}
