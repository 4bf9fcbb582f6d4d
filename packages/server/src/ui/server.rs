//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::domain::MessagePusher;
use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetRoomStateUseCase, JoinRoomUseCase,
    RollDieUseCase, ToggleHideRollsUseCase, UpdateHealthUseCase,
};

use super::{
    handler::{debug_room_state, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket dice room server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_client_usecase,
///     join_room_usecase,
///     roll_die_usecase,
///     toggle_hide_rolls_usecase,
///     update_health_usecase,
///     disconnect_client_usecase,
///     get_room_state_usecase,
///     message_pusher,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    /// ConnectClientUseCase（接続確立のユースケース）
    connect_client_usecase: Arc<ConnectClientUseCase>,
    /// JoinRoomUseCase（入室のユースケース）
    join_room_usecase: Arc<JoinRoomUseCase>,
    /// RollDieUseCase（ダイスロールのユースケース）
    roll_die_usecase: Arc<RollDieUseCase>,
    /// ToggleHideRollsUseCase（DM 結果秘匿フラグ反転のユースケース）
    toggle_hide_rolls_usecase: Arc<ToggleHideRollsUseCase>,
    /// UpdateHealthUseCase（HP 更新のユースケース）
    update_health_usecase: Arc<UpdateHealthUseCase>,
    /// DisconnectClientUseCase（切断のユースケース）
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// GetRoomStateUseCase（部屋状態取得のユースケース）
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        roll_die_usecase: Arc<RollDieUseCase>,
        toggle_hide_rolls_usecase: Arc<ToggleHideRollsUseCase>,
        update_health_usecase: Arc<UpdateHealthUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            connect_client_usecase,
            join_room_usecase,
            roll_die_usecase,
            toggle_hide_rolls_usecase,
            update_health_usecase,
            disconnect_client_usecase,
            get_room_state_usecase,
            message_pusher,
        }
    }

    /// Run the WebSocket dice room server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            connect_client_usecase: self.connect_client_usecase,
            join_room_usecase: self.join_room_usecase,
            roll_die_usecase: self.roll_die_usecase,
            toggle_hide_rolls_usecase: self.toggle_hide_rolls_usecase,
            update_health_usecase: self.update_health_usecase,
            disconnect_client_usecase: self.disconnect_client_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
            message_pusher: self.message_pusher,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/debug/room", get(debug_room_state))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "WebSocket dice room server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
