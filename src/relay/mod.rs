//! Spectator relay: rooms, wire protocol and the TCP fan-out server

pub mod protocol;
pub mod room;
pub mod server;

pub use protocol::{ClientMessage, ErrorCode, Role, ServerMessage};
pub use room::{generate_room_code, ClientId, Room, ROOM_CODE_LEN};
pub use server::{run_relay, RelayConfig};
