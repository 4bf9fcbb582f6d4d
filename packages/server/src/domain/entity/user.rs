//! User エンティティ
//!
//! 部屋に入室した参加者。ロールは入室時に固定されます。
//! HP はプレイヤーのみが持ち、常に `0 <= current <= max` を満たします。

use crate::domain::value_object::{ClientId, Role, Timestamp, UserName};

/// プレイヤーの HP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    max: i32,
    current: i32,
}

impl Health {
    /// 最大 HP のデフォルト値
    pub const DEFAULT_MAX: i32 = 20;

    /// 入室時の指定値から HP を作成
    ///
    /// 最大 HP は未指定または 0 以下のとき 20 にフォールバックし、
    /// 現在 HP は未指定または 0 以下のとき最大 HP に揃えます。
    /// 最後に `[0, max]` へクランプします。
    pub fn from_join_values(max: Option<i32>, current: Option<i32>) -> Self {
        let max = max.filter(|&h| h > 0).unwrap_or(Self::DEFAULT_MAX);
        let current = current.filter(|&h| h > 0).unwrap_or(max);
        Self {
            max,
            current: current.clamp(0, max),
        }
    }

    pub fn max(self) -> i32 {
        self.max
    }

    pub fn current(self) -> i32 {
        self.current
    }

    /// 現在 HP を `[0, max]` にクランプして更新
    pub fn set_current(&mut self, new_health: i32) {
        self.current = new_health.clamp(0, self.max);
    }
}

/// 部屋の参加者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: ClientId,
    pub name: UserName,
    pub role: Role,
    pub joined_at: Timestamp,
    /// プレイヤーのみ Some
    pub health: Option<Health>,
}

impl User {
    /// DM として入室する参加者を作成
    pub fn new_dm(id: ClientId, name: UserName, joined_at: Timestamp) -> Self {
        Self {
            id,
            name,
            role: Role::Dm,
            joined_at,
            health: None,
        }
    }

    /// プレイヤーとして入室する参加者を作成
    pub fn new_player(
        id: ClientId,
        name: UserName,
        joined_at: Timestamp,
        max_health: Option<i32>,
        current_health: Option<i32>,
    ) -> Self {
        Self {
            id,
            name,
            role: Role::Player,
            joined_at,
            health: Some(Health::from_join_values(max_health, current_health)),
        }
    }

    pub fn is_dm(&self) -> bool {
        self.role == Role::Dm
    }
}
