//! WebSocket dice room server.
//!
//! Hosts a single room where up to 5 participants (at most one DM) roll dice,
//! track player health, and optionally hide the DM's roll results.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin saikoro-server
//! DM_SECRET=changeme cargo run --bin saikoro-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use tokio::sync::Mutex;

use saikoro_server::{
    domain::Room,
    infrastructure::{
        dice::RandDieRoller, message_pusher::WebSocketMessagePusher,
        repository::InMemoryRoomRepository,
    },
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetRoomStateUseCase, JoinRoomUseCase,
        RollDieUseCase, ToggleHideRollsUseCase, UpdateHealthUseCase,
    },
};
use saikoro_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "saikoro-server")]
#[command(about = "WebSocket dice room server with DM-hidden rolls", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Secret required to join as DM (falls back to the DM_SECRET env var)
    #[arg(long, env = "DM_SECRET")]
    dm_secret: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("saikoro_server", env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    if args.dm_secret.is_none() {
        tracing::warn!("No DM secret configured; all DM join attempts will be rejected");
    }

    // Initialize dependencies in order:
    // 1. Repository
    // 2. DieRoller
    // 3. MessagePusher
    // 4. UseCases
    // 5. Server

    // 1. Create Repository (in-memory database)
    let room = Arc::new(Mutex::new(Room::new()));
    let repository = Arc::new(InMemoryRoomRepository::new(room));

    // 2. Create DieRoller (thread-local RNG implementation)
    let die_roller = Arc::new(RandDieRoller::new());

    // 3. Create MessagePusher (WebSocket implementation)
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients.clone()));

    // 4. Create UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(repository.clone(), args.dm_secret));
    let roll_die_usecase = Arc::new(RollDieUseCase::new(repository.clone(), die_roller));
    let toggle_hide_rolls_usecase = Arc::new(ToggleHideRollsUseCase::new(repository.clone()));
    let update_health_usecase = Arc::new(UpdateHealthUseCase::new(repository.clone()));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(repository.clone()));

    // 5. Create and run the server
    let server = Server::new(
        connect_client_usecase,
        join_room_usecase,
        roll_die_usecase,
        toggle_hide_rolls_usecase,
        update_health_usecase,
        disconnect_client_usecase,
        get_room_state_usecase,
        message_pusher,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
