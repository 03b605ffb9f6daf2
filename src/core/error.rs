//! Engine error types

use thiserror::Error;

/// Errors surfaced by engine construction.
///
/// Gameplay itself never errors: invalid moves report boolean failure and
/// board overflow is an observable state, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: i8, width: i8 },
}
