//! GameView: maps engine state into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;

/// Glyphs for one board cell (two columns wide to compensate for terminal
/// glyph aspect ratio)
const FILLED: &str = "[]";
const EMPTY: &str = " .";
const BLANK: &str = "  ";

/// Renders a game into a list of terminal lines
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state as one text frame, top line first.
    pub fn render(&self, game: &Game) -> Vec<String> {
        let width = game.board().width() as usize;
        let height = game.board().height() as usize;

        let mut cells = vec![vec![false; width]; height];
        for field in game.board().filled_fields() {
            cells[field.y as usize][field.x as usize] = true;
        }
        // The active piece may still be partly above the visible area.
        for (x, y) in game.active_cells() {
            if y >= 0 && (y as usize) < height && x >= 0 && (x as usize) < width {
                cells[y as usize][x as usize] = true;
            }
        }

        let panel = self.side_panel(game);
        let border = format!("+{}+", "-".repeat(width * 2));

        let mut frame = Vec::with_capacity(height + 2);
        frame.push(border.clone());
        for (y, row) in cells.iter().enumerate() {
            let mut line = String::with_capacity(width * 2 + 2);
            line.push('|');
            for &filled in row {
                line.push_str(if filled { FILLED } else { EMPTY });
            }
            line.push('|');
            if let Some(text) = panel.get(y) {
                line.push_str("  ");
                line.push_str(text);
            }
            frame.push(line);
        }
        frame.push(border);
        frame
    }

    /// Lookahead preview plus the score readout, one line per board row
    fn side_panel(&self, game: &Game) -> Vec<String> {
        let mut panel = Vec::new();
        panel.push(format!("next  {}", game.next_piece().kind().as_str()));

        let next = game.next_piece();
        let bounds = next.bounding_box();
        for row in bounds.min_y..=bounds.max_y {
            let mut line = String::new();
            for col in bounds.min_x..=bounds.max_x {
                let filled = next
                    .block_positions()
                    .any(|(x, y)| x == col && y == row);
                line.push_str(if filled { FILLED } else { BLANK });
            }
            panel.push(line);
        }

        panel.push(String::new());
        panel.push(format!("score  {}", game.score()));
        panel.push(format!("lines  {}", game.lines_cleared()));
        panel.push(format!("level  {}", game.level()));

        if game.is_game_over() {
            panel.push(String::new());
            panel.push("GAME OVER".to_string());
            panel.push("press r to restart, q to quit".to_string());
        }
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_frame_dimensions() {
        let game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 1).unwrap();
        let frame = GameView.render(&game);
        assert_eq!(frame.len(), BOARD_HEIGHT as usize + 2);
        assert!(frame[0].starts_with('+'));
        assert!(frame.last().unwrap().starts_with('+'));
    }

    #[test]
    fn test_fresh_game_shows_no_blocks_on_board() {
        // The first piece spawns above the visible area.
        let game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 1).unwrap();
        let frame = GameView.render(&game);
        let board_area: String = frame[1..=BOARD_HEIGHT as usize]
            .iter()
            .map(|line| line.split('|').nth(1).unwrap_or(""))
            .collect();
        assert!(!board_area.contains(FILLED));
    }

    #[test]
    fn test_panel_shows_counters() {
        let game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 1).unwrap();
        let joined = GameView.render(&game).join("\n");
        assert!(joined.contains("next"));
        assert!(joined.contains("score  0"));
        assert!(joined.contains("lines  0"));
        assert!(joined.contains("level  0"));
        assert!(!joined.contains("GAME OVER"));
    }

    #[test]
    fn test_fallen_piece_appears_in_frame() {
        let mut game = Game::new(BOARD_HEIGHT, BOARD_WIDTH, 1).unwrap();
        while game.move_down() {}
        let frame = GameView.render(&game);
        let board_area: String = frame[1..=BOARD_HEIGHT as usize]
            .iter()
            .map(|line| line.split('|').nth(1).unwrap_or(""))
            .collect();
        assert!(board_area.contains(FILLED));
    }
}
