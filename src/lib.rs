//! Falling-block puzzle engine with a terminal front end and a spectator
//! relay server.
//!
//! The engine (`core`) is synchronous and timer-free; presentation and
//! networking consume it through its command/query surface.

pub mod core;
pub mod input;
pub mod relay;
pub mod term;
pub mod types;
