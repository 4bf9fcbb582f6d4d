//! HTTP API response DTOs

use serde::Serialize;

use saikoro_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Room, User};

/// `/debug/room` が返す部屋の状態
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStateDto {
    pub users: Vec<UserDetailDto>,
    pub dm_hide_rolls: bool,
    pub roll_count: usize,
}

/// 参加者の詳細（タイムスタンプは RFC 3339 形式）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    pub id: String,
    pub name: String,
    pub role: String,
    pub joined_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_health: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_health: Option<i32>,
}

impl RoomStateDto {
    pub fn from_room(room: &Room) -> Self {
        Self {
            users: room.users().iter().map(UserDetailDto::from).collect(),
            dm_hide_rolls: room.hide_rolls_enabled(),
            roll_count: room.history().len(),
        }
    }
}

impl From<&User> for UserDetailDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.as_str().to_string(),
            role: user.role.as_str().to_string(),
            joined_at: timestamp_to_jst_rfc3339(user.joined_at.value()),
            max_health: user.health.map(|h| h.max()),
            current_health: user.health.map(|h| h.current()),
        }
    }
}
