//! Real-time presence and wake-up relay server.
//!
//! Tracks online users per group room and relays wake-up, status, and buzz
//! events over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin mezame-server
//! cargo run --bin mezame-server -- --host 0.0.0.0 --port 3000 --allowed-origin https://app.example.com
//! ```

use std::sync::Arc;

use clap::Parser;

use mezame_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryPresenceRepository,
    },
    ui::Server,
    usecase::{
        BuzzUseCase, ConnectUseCase, DisconnectUseCase, JoinGroupUseCase, LeaveGroupUseCase,
        RelayStatsUseCase, StatusUpdateUseCase, WakeUpUseCase,
    },
};
use mezame_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "mezame-server")]
#[command(about = "Real-time presence and wake-up relay", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "LISTEN_PORT", default_value = "8080")]
    port: u16,

    /// CORS allow-list for the transport boundary: one origin, or `*`
    #[arg(long, env = "ALLOWED_ORIGIN", default_value = "*")]
    allowed_origin: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases
    // 4. Server

    // 1. Create Repository (in-memory presence state)
    let repository = Arc::new(InMemoryPresenceRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let connect_usecase = Arc::new(ConnectUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let join_group_usecase = Arc::new(JoinGroupUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let leave_group_usecase = Arc::new(LeaveGroupUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let wake_up_usecase = Arc::new(WakeUpUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let status_update_usecase = Arc::new(StatusUpdateUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let buzz_usecase = Arc::new(BuzzUseCase::new(message_pusher.clone()));
    let relay_stats_usecase = Arc::new(RelayStatsUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        connect_usecase,
        disconnect_usecase,
        join_group_usecase,
        leave_group_usecase,
        wake_up_usecase,
        status_update_usecase,
        buzz_usecase,
        relay_stats_usecase,
        args.allowed_origin,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
