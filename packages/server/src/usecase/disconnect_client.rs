//! UseCase: 切断処理
//!
//! トランスポートが切断を報告した時点の処理。退室は即時かつ無条件で、
//! 入室していない接続の切断でも安全に呼び出せます（冪等）。

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, RoomRepository, User};

/// 退室した参加者がいた場合の結果
#[derive(Debug)]
pub struct DisconnectOutcome {
    /// 退室した参加者
    pub user: User,
    /// 退室後に残った参加者一覧（挿入順）
    pub users: Vec<User>,
    /// user-left を送るべき接続（残った全参加者）
    pub broadcast_targets: Vec<ClientId>,
}

/// 切断のユースケース
pub struct DisconnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// 送信チャンネルの登録解除は参加の有無に関わらず行う。
    /// 部屋の参加者だった場合のみ退室結果を返す（DM の退室では
    /// Repository 側で秘匿フラグが false に戻る）。
    pub async fn execute(&self, client_id: &ClientId) -> Option<DisconnectOutcome> {
        self.message_pusher.unregister_client(client_id).await;

        let user = self.repository.withdraw_user(client_id).await?;
        let users = self.repository.list_users().await;
        let broadcast_targets = users.iter().map(|u| u.id.clone()).collect();

        tracing::info!("User left: {}", user.name.as_str());

        Some(DisconnectOutcome {
            user,
            users,
            broadcast_targets,
        })
    }
}
