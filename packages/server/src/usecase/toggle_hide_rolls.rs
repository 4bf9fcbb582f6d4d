//! UseCase: DM 結果秘匿フラグの反転処理

use std::sync::Arc;

use crate::domain::{ClientId, Role, RoomRepository};

use super::error::ToggleError;

/// フラグ反転の結果
#[derive(Debug)]
pub struct ToggleOutcome {
    /// 反転後のフラグ値
    pub hide_rolls: bool,
    /// hide-rolls-changed を送るべき接続（要求元を含む全参加者）
    pub broadcast_targets: Vec<ClientId>,
}

/// DM 結果秘匿フラグ反転のユースケース
pub struct ToggleHideRollsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl ToggleHideRollsUseCase {
    /// 新しい ToggleHideRollsUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// フラグ反転を実行
    ///
    /// 入室済みの DM のみが実行できる。反転は Repository 内の
    /// 1 つの排他区間で行われ、読み出しと書き込みが交錯しない。
    pub async fn execute(&self, client_id: &ClientId) -> Result<ToggleOutcome, ToggleError> {
        let user = self
            .repository
            .find_user(client_id)
            .await
            .ok_or(ToggleError::Unauthorized)?;
        if user.role != Role::Dm {
            return Err(ToggleError::Unauthorized);
        }

        let hide_rolls = self.repository.toggle_hide_rolls().await;
        let broadcast_targets = self
            .repository
            .list_users()
            .await
            .into_iter()
            .map(|u| u.id)
            .collect();

        tracing::info!(
            "DM {} hidden rolls",
            if hide_rolls { "enabled" } else { "disabled" }
        );

        Ok(ToggleOutcome {
            hide_rolls,
            broadcast_targets,
        })
    }
}
