//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::MessagePusher;
use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetRoomStateUseCase, JoinRoomUseCase,
    RollDieUseCase, ToggleHideRollsUseCase, UpdateHealthUseCase,
};

/// Shared application state
///
/// ハンドラから各 UseCase へアクセスするための集約。
/// `message_pusher` は UseCase が返した宛先リストへの送信に使われます。
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub roll_die_usecase: Arc<RollDieUseCase>,
    pub toggle_hide_rolls_usecase: Arc<ToggleHideRollsUseCase>,
    pub update_health_usecase: Arc<UpdateHealthUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
    pub message_pusher: Arc<dyn MessagePusher>,
}
