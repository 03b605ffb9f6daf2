//! Room codes and room bookkeeping
//!
//! Codes are 6-character alphanumeric strings drawn from the OS RNG. The
//! server re-rolls on the (unlikely) collision with a live room.

use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::OsRng;

/// Connection identifier assigned by the relay server
pub type ClientId = u64;

pub const ROOM_CODE_LEN: usize = 6;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a fresh 6-character room code.
pub fn generate_room_code() -> String {
    let mut rng = OsRng;
    let dist = Uniform::from(0..ALPHABET.len());

    let mut code = String::with_capacity(ROOM_CODE_LEN);
    for _ in 0..ROOM_CODE_LEN {
        code.push(ALPHABET[dist.sample(&mut rng)] as char);
    }
    code
}

/// One live room: the player session plus its spectators.
///
/// The room carries no game state; it only routes tokens.
#[derive(Debug)]
pub struct Room {
    pub challenger: String,
    pub player: ClientId,
    pub spectators: Vec<ClientId>,
}

impl Room {
    pub fn new(challenger: String, player: ClientId) -> Self {
        Self {
            challenger,
            player,
            spectators: Vec::new(),
        }
    }
}
