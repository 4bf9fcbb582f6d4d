//! UseCase 層のエラー定義
//!
//! すべて呼び出し側の入力に起因する検証エラー。発生元の接続へ
//! エラーメッセージとして通知するだけで、部屋の状態は変更されず、
//! 接続も切断されません。Display 実装の文字列がそのまま
//! クライアントへ送るエラーメッセージになります。

use thiserror::Error;

use crate::domain::RoomError;

/// join イベントの失敗
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    /// DM シークレットの不一致（シークレット未設定時は常にこのエラー）
    #[error("Invalid DM secret.")]
    InvalidDmSecret,
    /// 定員超過
    #[error("Room is full. Maximum 5 users allowed.")]
    RoomFull,
    /// DM の重複
    #[error("A DM is already in the room.")]
    DuplicateDm,
    /// この接続は入室済み
    #[error("Already joined.")]
    AlreadyJoined,
    /// 表示名またはロールの形式不正
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<RoomError> for JoinError {
    fn from(e: RoomError) -> Self {
        match e {
            RoomError::RoomFull => JoinError::RoomFull,
            RoomError::DmAlreadyPresent => JoinError::DuplicateDm,
        }
    }
}

/// roll イベントの失敗
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    /// 入室していない接続からのロール要求
    #[error("You must join the room first.")]
    NotJoined,
    /// カタログ外のダイス種別
    #[error("Invalid die type.")]
    InvalidDieType,
}

/// toggle-hide-rolls イベントの失敗
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    /// DM 以外（未入室を含む）からの要求
    #[error("Only the DM can toggle hide rolls.")]
    Unauthorized,
}

/// update-health イベントの失敗
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealthError {
    /// プレイヤー以外（未入室を含む）からの要求
    #[error("Only players can update health.")]
    Unauthorized,
}
