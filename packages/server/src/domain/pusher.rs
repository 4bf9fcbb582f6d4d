//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ通知の抽象化。UseCase 層・UI 層はこの trait に
//! 依存し、WebSocket という具体的なトランスポートには依存しません。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::ClientId;

/// クライアントへの送信チャンネル
///
/// 接続ごとに 1 本。このチャンネルの順序保証が「同一接続内のイベント順序は
/// 保存される」という要件を支えます。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// - `push_to`: 特定の 1 接続への送信
/// - `broadcast`: 指定した接続集合への送信（宛先の選定は呼び出し側が行う）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信チャンネルを登録
    async fn register_client(&self, client_id: ClientId, sender: PusherChannel);

    /// クライアントの送信チャンネルを登録解除
    async fn unregister_client(&self, client_id: &ClientId);

    /// 特定のクライアントへメッセージを送信
    async fn push_to(&self, client_id: &ClientId, content: &str) -> Result<(), MessagePushError>;

    /// 指定したクライアント集合へメッセージを送信
    ///
    /// 一部のクライアントへの送信失敗は許容する（ログのみ）。
    async fn broadcast(
        &self,
        targets: Vec<ClientId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
