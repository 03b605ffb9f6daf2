//! Relay server binary.
//!
//! Listens on RELAY_HOST:RELAY_PORT (default 127.0.0.1:3000) and mirrors
//! player command tokens to spectators. Log verbosity follows RUST_LOG.

use anyhow::Result;

use versus_tetris::relay::{run_relay, RelayConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run_relay(RelayConfig::from_env(), None).await
}
