//! Core game engine: board, pieces, sequencing and the game state machine

pub mod board;
pub mod error;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use board::{Board, FilledCell, FilledFields};
pub use error::GameError;
pub use game::{spawn_anchor, Game, LevelChange, LockEvent, Position};
pub use piece::{BlockOffset, BlockPositions, BoundingBox, Piece, MAX_GRID};
pub use rng::{PieceSampler, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_award};
