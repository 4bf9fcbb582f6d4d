//! WebSocket message DTOs
//!
//! ワイヤプロトコルはテキストフレーム上の JSON。`type` フィールド
//! （kebab-case）でメッセージ種別を判別し、ペイロードのフィールド名は
//! camelCase（`dieType`, `newHealth`, `hideRolls`, ...）です。
//! 秘匿されたロール結果は `result: null` として送信されます。

use serde::{Deserialize, Serialize};

use crate::domain::{RedactedRoll, User};

/// クライアント → サーバのイベント
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// 入室要求（未入室の接続のみ有効）
    Join(JoinPayload),
    /// ダイスロール要求（入室済みの接続のみ有効）
    Roll(RollPayload),
    /// DM の結果秘匿フラグの反転（DM のみ有効）
    ToggleHideRolls,
    /// HP 更新（プレイヤーのみ有効）
    UpdateHealth(UpdateHealthPayload),
}

/// join イベントのペイロード
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPayload {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub max_health: Option<i32>,
    #[serde(default)]
    pub current_health: Option<i32>,
}

/// roll イベントのペイロード
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollPayload {
    pub die_type: String,
}

/// update-health イベントのペイロード
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHealthPayload {
    pub new_health: i32,
}

/// サーバ → クライアントのメッセージ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    HistorySync,
    JoinSuccess,
    JoinError,
    UserJoined,
    UserLeft,
    RollResult,
    RollError,
    HideRollsChanged,
    HealthUpdated,
    HealthError,
    ToggleError,
}

/// 参加者の DTO
///
/// HP フィールドはプレイヤーのみ（DM ではフィールドごと省略）。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub role: String,
    pub joined_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_health: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_health: Option<i32>,
}

/// ロール記録の DTO
///
/// `result` は閲覧者に対して秘匿されている場合 `null`。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollDto {
    pub id: String,
    pub user_name: String,
    pub role: String,
    pub die_type: String,
    pub result: Option<u32>,
    pub hidden: bool,
    pub timestamp: i64,
}

/// history-sync メッセージ
#[derive(Debug, Serialize)]
pub struct HistorySyncMessage {
    pub r#type: MessageType,
    pub history: Vec<RollDto>,
}

impl HistorySyncMessage {
    pub fn new(history: Vec<RedactedRoll>) -> Self {
        Self {
            r#type: MessageType::HistorySync,
            history: history.into_iter().map(RollDto::from).collect(),
        }
    }
}

/// join-success メッセージ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSuccessMessage {
    pub r#type: MessageType,
    pub user: UserDto,
    pub users: Vec<UserDto>,
    pub history: Vec<RollDto>,
    pub hide_rolls: bool,
}

impl JoinSuccessMessage {
    pub fn new(user: User, users: Vec<User>, history: Vec<RedactedRoll>, hide_rolls: bool) -> Self {
        Self {
            r#type: MessageType::JoinSuccess,
            user: UserDto::from(user),
            users: users.into_iter().map(UserDto::from).collect(),
            history: history.into_iter().map(RollDto::from).collect(),
            hide_rolls,
        }
    }
}

/// user-joined メッセージ
#[derive(Debug, Serialize)]
pub struct UserJoinedMessage {
    pub r#type: MessageType,
    pub user: UserDto,
    pub users: Vec<UserDto>,
}

impl UserJoinedMessage {
    pub fn new(user: User, users: Vec<User>) -> Self {
        Self {
            r#type: MessageType::UserJoined,
            user: UserDto::from(user),
            users: users.into_iter().map(UserDto::from).collect(),
        }
    }
}

/// user-left メッセージ
#[derive(Debug, Serialize)]
pub struct UserLeftMessage {
    pub r#type: MessageType,
    pub user: UserDto,
    pub users: Vec<UserDto>,
}

impl UserLeftMessage {
    pub fn new(user: User, users: Vec<User>) -> Self {
        Self {
            r#type: MessageType::UserLeft,
            user: UserDto::from(user),
            users: users.into_iter().map(UserDto::from).collect(),
        }
    }
}

/// roll-result メッセージ
///
/// 同じ構造体をローラー本人（常に真の結果）と他の参加者
/// （hidden の場合 `result: null`）の両方へ使います。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResultMessage {
    pub r#type: MessageType,
    pub id: String,
    pub user_name: String,
    pub role: String,
    pub die_type: String,
    pub result: Option<u32>,
    pub hidden: bool,
    pub timestamp: i64,
}

impl RollResultMessage {
    pub fn new(roll: RedactedRoll) -> Self {
        Self {
            r#type: MessageType::RollResult,
            id: roll.id.as_str().to_string(),
            user_name: roll.user_name.into_string(),
            role: roll.role.as_str().to_string(),
            die_type: roll.die_type.as_str().to_string(),
            result: roll.result,
            hidden: roll.hidden,
            timestamp: roll.timestamp.value(),
        }
    }
}

/// hide-rolls-changed メッセージ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HideRollsChangedMessage {
    pub r#type: MessageType,
    pub hide_rolls: bool,
}

impl HideRollsChangedMessage {
    pub fn new(hide_rolls: bool) -> Self {
        Self {
            r#type: MessageType::HideRollsChanged,
            hide_rolls,
        }
    }
}

/// health-updated メッセージ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthUpdatedMessage {
    pub r#type: MessageType,
    pub user_id: String,
    pub current_health: i32,
    pub users: Vec<UserDto>,
}

impl HealthUpdatedMessage {
    pub fn new(user: User, users: Vec<User>) -> Self {
        let current_health = user.health.map(|h| h.current()).unwrap_or_default();
        Self {
            r#type: MessageType::HealthUpdated,
            user_id: user.id.into_string(),
            current_health,
            users: users.into_iter().map(UserDto::from).collect(),
        }
    }
}

/// エラーメッセージ（join-error / roll-error / toggle-error / health-error）
///
/// いずれも発生元の接続にのみ送信されます。
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}

impl ErrorMessage {
    pub fn join_error(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::JoinError,
            message: message.into(),
        }
    }

    pub fn roll_error(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::RollError,
            message: message.into(),
        }
    }

    pub fn toggle_error(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::ToggleError,
            message: message.into(),
        }
    }

    pub fn health_error(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::HealthError,
            message: message.into(),
        }
    }
}
