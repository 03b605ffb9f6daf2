//! Relay wire protocol - line-delimited JSON messages
//!
//! The relay mirrors short command tokens between a player session and the
//! spectators of a room. Tokens travel verbatim; the relay neither parses
//! nor validates their meaning (that is the receiving engine's business).

use serde::{Deserialize, Serialize};

/// Role of a session within a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Spectator,
}

/// Messages a client may send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Open a new room; the sender becomes its player
    Create { challenger: String },
    /// Enter an existing room
    Join { room: String, role: Role },
    /// Mirror a command token to the room's spectators (player only)
    Command { token: String },
}

/// Messages the relay sends back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Created { room: String },
    Joined { room: String, role: Role },
    Command { token: String },
    Error { code: ErrorCode, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownRoom,
    PlayerSlotTaken,
    AlreadyInRoom,
    NotPlayer,
    RoomClosed,
    InvalidMessage,
}

/// Parse one line of client input
pub fn parse_message(line: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(line)
}

/// Create an error message
pub fn create_error(code: ErrorCode, message: &str) -> ServerMessage {
    ServerMessage::Error {
        code,
        message: message.to_string(),
    }
}
