//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ClientId, Role},
    infrastructure::dto::websocket::{
        ClientMessage, ErrorMessage, HealthUpdatedMessage, HideRollsChangedMessage,
        HistorySyncMessage, JoinSuccessMessage, RollResultMessage, UserJoinedMessage,
        UserLeftMessage,
    },
    ui::state::AppState,
    usecase::JoinRequest,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // 接続ごとにサーバ側で ClientId を採番する
    let client_id = ClientId::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, client_id))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: messages addressed to this
/// client (via rx channel) are sent to its WebSocket connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, client_id: ClientId) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Use ConnectClientUseCase to handle connection
    // (register_client is called inside the UseCase)
    let history = state
        .connect_client_usecase
        .execute(client_id.clone(), tx)
        .await;

    // Spawn a task to forward pushed messages to this client
    let mut send_task = pusher_loop(rx, sender);

    // Send current roll history to the newly connected client
    push_json(&state, &client_id, &HistorySyncMessage::new(history)).await;
    tracing::info!("Sent history sync to '{}'", client_id);

    let client_id_clone = client_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text: {}", text);

                    // Parse the incoming event
                    let event = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Failed to parse event from '{}': {}",
                                client_id_clone,
                                e
                            );
                            continue;
                        }
                    };

                    dispatch_event(&state_clone, &client_id_clone, event).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", client_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Use DisconnectClientUseCase to handle disconnection
    // (未入室の接続は退室通知なしで片付けられる)
    match state.disconnect_client_usecase.execute(&client_id).await {
        Some(outcome) => {
            tracing::info!(
                "Client '{}' ('{}') disconnected and left the room",
                client_id,
                outcome.user.name
            );
            let left_msg = UserLeftMessage::new(outcome.user.clone(), outcome.users);
            broadcast_json(&state, outcome.broadcast_targets, &left_msg).await;
        }
        None => {
            tracing::info!("Client '{}' disconnected (was not in the room)", client_id);
        }
    }
}

/// Dispatch a parsed client event to the corresponding UseCase
async fn dispatch_event(state: &Arc<AppState>, client_id: &ClientId, event: ClientMessage) {
    match event {
        ClientMessage::Join(payload) => {
            let request = JoinRequest {
                name: payload.name,
                role: payload.role,
                secret: payload.secret,
                max_health: payload.max_health,
                current_health: payload.current_health,
            };
            match state
                .join_room_usecase
                .execute(client_id.clone(), request)
                .await
            {
                Ok(outcome) => {
                    tracing::info!(
                        "Client '{}' joined as '{}' ({})",
                        client_id,
                        outcome.user.name,
                        outcome.user.role.as_str()
                    );

                    // join-success は要求元のみ、user-joined は他の参加者へ
                    let success = JoinSuccessMessage::new(
                        outcome.user.clone(),
                        outcome.users.clone(),
                        outcome.history,
                        outcome.hide_rolls,
                    );
                    push_json(state, client_id, &success).await;

                    let joined = UserJoinedMessage::new(outcome.user, outcome.users);
                    broadcast_json(state, outcome.broadcast_targets, &joined).await;
                }
                Err(e) => {
                    tracing::warn!("Join rejected for '{}': {}", client_id, e);
                    push_json(state, client_id, &ErrorMessage::join_error(e.to_string())).await;
                }
            }
        }
        ClientMessage::Roll(payload) => {
            match state
                .roll_die_usecase
                .execute(client_id, &payload.die_type)
                .await
            {
                Ok(outcome) => {
                    // 本人には常に出目を見せ、他の参加者には秘匿ビューを送る。
                    // DM は部屋に 1 人なので、本人以外の宛先は全員非 DM。
                    let own_view = RollResultMessage::new(outcome.roll.unredacted());
                    push_json(state, client_id, &own_view).await;

                    let others_view = RollResultMessage::new(outcome.roll.redact_for(Role::Player));
                    broadcast_json(state, outcome.broadcast_targets, &others_view).await;
                }
                Err(e) => {
                    tracing::warn!("Roll rejected for '{}': {}", client_id, e);
                    push_json(state, client_id, &ErrorMessage::roll_error(e.to_string())).await;
                }
            }
        }
        ClientMessage::ToggleHideRolls => {
            match state.toggle_hide_rolls_usecase.execute(client_id).await {
                Ok(outcome) => {
                    tracing::info!("DM '{}' set hide_rolls to {}", client_id, outcome.hide_rolls);
                    let changed = HideRollsChangedMessage::new(outcome.hide_rolls);
                    broadcast_json(state, outcome.broadcast_targets, &changed).await;
                }
                Err(e) => {
                    tracing::warn!("Toggle rejected for '{}': {}", client_id, e);
                    push_json(state, client_id, &ErrorMessage::toggle_error(e.to_string())).await;
                }
            }
        }
        ClientMessage::UpdateHealth(payload) => {
            match state
                .update_health_usecase
                .execute(client_id, payload.new_health)
                .await
            {
                Ok(outcome) => {
                    let updated = HealthUpdatedMessage::new(outcome.user, outcome.users);
                    broadcast_json(state, outcome.broadcast_targets, &updated).await;
                }
                Err(e) => {
                    tracing::warn!("Health update rejected for '{}': {}", client_id, e);
                    push_json(state, client_id, &ErrorMessage::health_error(e.to_string())).await;
                }
            }
        }
    }
}

/// Serialize a message and push it to a single client
async fn push_json<T: Serialize>(state: &Arc<AppState>, client_id: &ClientId, message: &T) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize message: {}", e);
            return;
        }
    };
    if let Err(e) = state.message_pusher.push_to(client_id, &json).await {
        tracing::warn!("Failed to push message to '{}': {}", client_id, e);
    }
}

/// Serialize a message and broadcast it to the given targets
async fn broadcast_json<T: Serialize>(state: &Arc<AppState>, targets: Vec<ClientId>, message: &T) {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize message: {}", e);
            return;
        }
    };
    if let Err(e) = state.message_pusher.broadcast(targets, &json).await {
        tracing::warn!("Failed to broadcast message: {}", e);
    }
}
