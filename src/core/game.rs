//! Game module - the falling-piece state machine
//!
//! Ties together board, pieces and sequencing: spawn placement, the
//! move/rotate/drop commands with their tentative-apply-then-revert
//! discipline, the lock path with line clears and scoring, and the
//! permanent game-over state once the board overflows.
//!
//! The game owns no timer. Gravity is driven by the caller invoking
//! `move_down` once per drop interval; the engine only exposes the
//! interval's current value.

use crate::core::board::Board;
use crate::core::error::GameError;
use crate::core::piece::Piece;
use crate::core::rng::PieceSampler;
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_award};
use crate::types::GameCommand;

/// Board coordinate of the active piece's local grid origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

/// Level transition carried by a lock event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub level: u32,
    pub drop_interval_ms: u32,
}

/// Consumable record of the most recent lock.
///
/// Observers poll this after a failed `move_down` to learn what the lock
/// changed: cleared lines, new totals, a level transition (with the new
/// drop interval) and whether the board overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows cleared by this lock (0 if none)
    pub lines_cleared: u32,
    pub total_lines: u32,
    pub score: u32,
    pub level_change: Option<LevelChange>,
    pub game_over: bool,
}

/// Anchor that centers a piece horizontally and parks it fully above the
/// visible board
pub fn spawn_anchor(board_width: i8, piece: &Piece) -> Position {
    let bounds = piece.bounding_box();
    Position {
        x: board_width / 2 - (bounds.width() + 1) / 2,
        y: -bounds.height() - 1,
    }
}

/// One running game: board, active piece, lookahead and counters
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Piece,
    anchor: Position,
    next: Piece,
    sampler: PieceSampler,
    lines_cleared: u32,
    score: u32,
    last_event: Option<LockEvent>,
}

impl Game {
    /// Create a game with an empty board and a freshly drawn active and
    /// lookahead piece.
    ///
    /// Fails fast on non-positive dimensions.
    pub fn new(height: i8, width: i8, seed: u32) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        let mut sampler = PieceSampler::new(seed);

        let active = Piece::new(sampler.draw(None));
        let next = Piece::new(sampler.draw(Some(active.kind())));
        let anchor = spawn_anchor(board.width(), &active);

        Ok(Self {
            board,
            active,
            anchor,
            next,
            sampler,
            lines_cleared: 0,
            score: 0,
            last_event: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_piece(&self) -> &Piece {
        &self.active
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// The precomputed lookahead piece
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Derived, never stored
    pub fn level(&self) -> u32 {
        level_for_lines(self.lines_cleared)
    }

    /// Current gravity interval for the caller-owned drop timer
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level())
    }

    pub fn is_game_over(&self) -> bool {
        self.board.overflow()
    }

    /// Board coordinates of the active piece's occupied cells
    pub fn active_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let anchor = self.anchor;
        self.active
            .block_positions()
            .map(move |(dx, dy)| (anchor.x + dx, anchor.y + dy))
    }

    /// Take and clear the record of the most recent lock
    pub fn take_lock_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Dispatch a command, reporting whether it changed the position
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::MoveDown => self.move_down(),
            GameCommand::Rotate => self.rotate(),
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.anchor.x += dx;
        if self.rejected_here() {
            self.anchor.x -= dx;
            return false;
        }
        true
    }

    /// Rotate clockwise in place, reverting if the new orientation does not
    /// fit at the unchanged anchor. No wall kicks are attempted.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.active.rotate();
        if self.rejected_here() {
            self.active.rotate_counter_clockwise();
            return false;
        }
        true
    }

    fn rejected_here(&self) -> bool {
        self.board
            .is_out_of_bounds(&self.active, self.anchor.x, self.anchor.y)
            || self
                .board
                .spot_is_taken(&self.active, self.anchor.x, self.anchor.y)
    }

    /// Advance the active piece one row.
    ///
    /// Returns true for an ordinary fall. A false return means the piece
    /// could not descend and was locked at its last valid position; the
    /// caller should redraw the whole board and poll `take_lock_event`.
    ///
    /// Only occupancy is checked on the way down; horizontal bounds cannot
    /// change during a vertical move.
    pub fn move_down(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.anchor.y += 1;
        if self
            .board
            .spot_is_taken(&self.active, self.anchor.x, self.anchor.y)
        {
            self.anchor.y -= 1;
            self.lock();
            return false;
        }
        true
    }

    /// Commit the active piece, promote the lookahead, resolve rows.
    fn lock(&mut self) {
        let level_before = self.level();

        self.board.place(&self.active, self.anchor.x, self.anchor.y);

        // Promote the lookahead and draw its replacement. The replacement
        // draw excludes only the kind that just became active.
        let promoted_kind = self.next.kind();
        let replacement = Piece::new(self.sampler.draw(Some(promoted_kind)));
        let promoted = std::mem::replace(&mut self.next, replacement);
        self.anchor = spawn_anchor(self.board.width(), &promoted);
        self.active = promoted;

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            // The multiplier uses the level in effect before this clear.
            self.score += line_award(cleared, level_before);
            self.lines_cleared += cleared;
        }

        let level_after = self.level();
        let level_change = (level_after != level_before).then(|| LevelChange {
            level: level_after,
            drop_interval_ms: drop_interval_ms(level_after),
        });

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            total_lines: self.lines_cleared,
            score: self.score,
            level_change,
            game_over: self.board.overflow(),
        });
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_lines_cleared(&mut self, lines: u32) {
        self.lines_cleared = lines;
    }
}
