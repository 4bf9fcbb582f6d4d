//! ドメインエラー定義
//!
//! いずれも呼び出し側の入力に起因する検証エラーであり、システム障害ではありません。
//! リトライもコネクション切断も行わず、発生元の接続へのみ通知されます。

use thiserror::Error;

/// 部屋の不変条件に違反する入室操作のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    /// 定員（5 人）超過
    #[error("Room is full. Maximum 5 users allowed.")]
    RoomFull,
    /// DM が既に部屋にいる
    #[error("A DM is already in the room.")]
    DmAlreadyPresent,
}

/// メッセージ送信のエラー
#[derive(Debug, Error)]
pub enum MessagePushError {
    /// 送信先のクライアントが登録されていない
    #[error("client '{0}' not found")]
    ClientNotFound(String),
    /// チャンネルへの送信に失敗（相手側の受信タスクが終了済みなど）
    #[error("failed to push message: {0}")]
    PushFailed(String),
}
