//! UseCase 層
//!
//! インバウンドイベント 1 種類につき 1 つの UseCase。
//! それぞれが Repository / DieRoller / MessagePusher の抽象に対して
//! 検証と状態変更を行い、UI 層へ「何を誰に送るか」を返します。
//! DTO の直列化と実際の送信は UI 層の責務です。

mod connect_client;
mod disconnect_client;
pub mod error;
mod get_room_state;
mod join_room;
mod roll_die;
mod toggle_hide_rolls;
mod update_health;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::{DisconnectClientUseCase, DisconnectOutcome};
pub use error::{HealthError, JoinError, RollError, ToggleError};
pub use get_room_state::GetRoomStateUseCase;
pub use join_room::{JoinOutcome, JoinRequest, JoinRoomUseCase};
pub use roll_die::{RollDieUseCase, RollOutcome};
pub use toggle_hide_rolls::{ToggleHideRollsUseCase, ToggleOutcome};
pub use update_health::{HealthOutcome, UpdateHealthUseCase};
