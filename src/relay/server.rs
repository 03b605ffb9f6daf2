//! TCP relay server
//!
//! Accepts persistent connections and fans player command tokens out to the
//! spectators of the same room. Uses tokio for async networking; one reader
//! loop and one writer task per client, line-delimited JSON on the wire.
//!
//! The relay is stateless with respect to the game: it never inspects a
//! token, only routes it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{info, warn};

use crate::relay::protocol::{
    create_error, parse_message, ClientMessage, ErrorCode, Role, ServerMessage,
};
use crate::relay::room::{generate_room_code, ClientId, Room};

/// Server configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl RelayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("RELAY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("RELAY_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        Self { host, port }
    }
}

/// Per-connection bookkeeping
struct ClientHandle {
    tx: mpsc::UnboundedSender<ServerMessage>,
    room: Option<String>,
    role: Option<Role>,
}

/// Shared server state.
///
/// Lock order is always clients before rooms.
struct RelayState {
    clients: RwLock<HashMap<ClientId, ClientHandle>>,
    rooms: RwLock<HashMap<String, Room>>,
    next_client_id: AtomicU64,
}

impl RelayState {
    fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            rooms: RwLock::new(HashMap::new()),
            next_client_id: AtomicU64::new(1),
        }
    }
}

/// Start the relay server.
///
/// Reports the bound address through `ready_tx` once listening, which lets
/// callers bind port 0 and discover the real port.
pub async fn run_relay(
    config: RelayConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    info!(%bound, "relay listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let state = Arc::new(RelayState::new());

    loop {
        let (socket, addr) = listener.accept().await?;
        let client_id = state.next_client_id.fetch_add(1, Ordering::Relaxed);
        info!(client_id, %addr, "client connected");

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, Arc::clone(&state)).await {
                warn!(client_id, error = %e, "client error");
            }
            // Idempotent; covers the early-error paths out of handle_client.
            disconnect(&state, client_id).await;
            info!(client_id, "client disconnected");
        });
    }
}

/// Handle a single client connection
async fn handle_client(
    socket: TcpStream,
    client_id: ClientId,
    state: Arc<RelayState>,
) -> anyhow::Result<()> {
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);

    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    {
        let mut clients = state.clients.write().await;
        clients.insert(
            client_id,
            ClientHandle {
                tx: tx.clone(),
                room: None,
                role: None,
            },
        );
    }

    // Writer task: serialize outbound messages, one JSON object per line.
    let write_task = tokio::spawn(async move {
        let mut buf: Vec<u8> = Vec::with_capacity(1024);
        while let Some(msg) = rx.recv().await {
            buf.clear();
            if serde_json::to_writer(&mut buf, &msg).is_err() {
                continue;
            }
            buf.push(b'\n');
            if writer.write_all(&buf).await.is_err() {
                break;
            }
            if writer.flush().await.is_err() {
                break;
            }
        }
    });

    let mut line = String::new();
    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_message(trimmed) {
            Ok(ClientMessage::Create { challenger }) => {
                handle_create(&state, client_id, challenger).await;
            }
            Ok(ClientMessage::Join { room, role }) => {
                handle_join(&state, client_id, room, role).await;
            }
            Ok(ClientMessage::Command { token }) => {
                handle_command(&state, client_id, token).await;
            }
            Err(e) => {
                let _ = tx.send(create_error(
                    ErrorCode::InvalidMessage,
                    &format!("JSON parse error: {}", e),
                ));
            }
        }
    }

    // Unregister before waiting on the writer: the registry holds a clone
    // of `tx`, and the writer only stops once every sender is gone.
    disconnect(&state, client_id).await;
    drop(tx);
    let _ = write_task.await;
    Ok(())
}

/// Open a new room with the sender as player
async fn handle_create(state: &RelayState, client_id: ClientId, challenger: String) {
    let mut clients = state.clients.write().await;
    let Some(client) = clients.get_mut(&client_id) else {
        return;
    };
    if client.room.is_some() {
        let _ = client.tx.send(create_error(
            ErrorCode::AlreadyInRoom,
            "leave the current room first",
        ));
        return;
    }

    let mut rooms = state.rooms.write().await;
    let mut code = generate_room_code();
    while rooms.contains_key(&code) {
        code = generate_room_code();
    }
    rooms.insert(code.clone(), Room::new(challenger, client_id));

    client.room = Some(code.clone());
    client.role = Some(Role::Player);
    info!(client_id, room = %code, "room created");
    let _ = client.tx.send(ServerMessage::Created { room: code });
}

/// Enter an existing room
async fn handle_join(state: &RelayState, client_id: ClientId, code: String, role: Role) {
    let mut clients = state.clients.write().await;
    let Some(client) = clients.get_mut(&client_id) else {
        return;
    };
    if client.room.is_some() {
        let _ = client.tx.send(create_error(
            ErrorCode::AlreadyInRoom,
            "leave the current room first",
        ));
        return;
    }

    let mut rooms = state.rooms.write().await;
    let Some(room) = rooms.get_mut(&code) else {
        let _ = client
            .tx
            .send(create_error(ErrorCode::UnknownRoom, "no such room"));
        return;
    };

    match role {
        Role::Player => {
            // The creator holds the player slot for the room's lifetime.
            let _ = client.tx.send(create_error(
                ErrorCode::PlayerSlotTaken,
                "room already has a player",
            ));
        }
        Role::Spectator => {
            room.spectators.push(client_id);
            client.room = Some(code.clone());
            client.role = Some(Role::Spectator);
            info!(client_id, room = %code, "spectator joined");
            let _ = client.tx.send(ServerMessage::Joined { room: code, role });
        }
    }
}

/// Fan a player's command token out to the room's spectators
async fn handle_command(state: &RelayState, client_id: ClientId, token: String) {
    let clients = state.clients.read().await;
    let Some(client) = clients.get(&client_id) else {
        return;
    };

    let (Some(code), Some(Role::Player)) = (&client.room, client.role) else {
        let _ = client.tx.send(create_error(
            ErrorCode::NotPlayer,
            "only the room's player may send commands",
        ));
        return;
    };

    let rooms = state.rooms.read().await;
    let Some(room) = rooms.get(code) else {
        return;
    };

    for spectator_id in &room.spectators {
        if let Some(spectator) = clients.get(spectator_id) {
            let _ = spectator.tx.send(ServerMessage::Command {
                token: token.clone(),
            });
        }
    }
}

/// Remove a client; a departing player takes the whole room with it
async fn disconnect(state: &RelayState, client_id: ClientId) {
    let mut clients = state.clients.write().await;
    let Some(client) = clients.remove(&client_id) else {
        return;
    };
    let Some(code) = client.room else {
        return;
    };

    let mut rooms = state.rooms.write().await;
    match client.role {
        Some(Role::Player) => {
            if let Some(room) = rooms.remove(&code) {
                info!(room = %code, "room closed");
                for spectator_id in room.spectators {
                    if let Some(spectator) = clients.get_mut(&spectator_id) {
                        spectator.room = None;
                        spectator.role = None;
                        let _ = spectator
                            .tx
                            .send(create_error(ErrorCode::RoomClosed, "the player left"));
                    }
                }
            }
        }
        _ => {
            if let Some(room) = rooms.get_mut(&code) {
                room.spectators.retain(|&s| s != client_id);
            }
        }
    }
}
