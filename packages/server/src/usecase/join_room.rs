//! UseCase: 入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 入室処理（DM シークレット検証、定員チェック、DM 重複チェック）
//!
//! ### なぜこのテストが必要か
//! - 検証順序の保証：シークレット検証は定員チェックより先に行う
//! - 失敗した入室が部屋の状態を変更しないことを保証
//! - プレイヤーの HP デフォルト値が正しく適用されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：プレイヤー入室・DM 入室
//! - 異常系：シークレット不一致、定員超過、DM 重複、二重入室
//! - エッジケース：シークレット未設定のサーバへの DM 入室

use std::sync::Arc;

use saikoro_shared::time::get_jst_timestamp;

use crate::domain::{
    ClientId, RedactedRoll, Role, RoomRepository, Timestamp, User, UserName,
};

use super::error::JoinError;

/// 入室要求
#[derive(Debug)]
pub struct JoinRequest {
    pub name: String,
    pub role: String,
    pub secret: Option<String>,
    pub max_health: Option<i32>,
    pub current_health: Option<i32>,
}

/// 入室成功時の結果
///
/// UI 層はこの結果から join-success（要求元宛）と user-joined
/// （`broadcast_targets` 宛）のメッセージを組み立てます。
#[derive(Debug)]
pub struct JoinOutcome {
    /// 入室した参加者
    pub user: User,
    /// 入室後の参加者一覧（挿入順）
    pub users: Vec<User>,
    /// 入室者自身のロール向けの履歴ビュー
    pub history: Vec<RedactedRoll>,
    /// 現在の DM 結果秘匿フラグ
    pub hide_rolls: bool,
    /// user-joined を送るべき接続（入室者本人を除く全参加者）
    pub broadcast_targets: Vec<ClientId>,
}

/// 入室のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    /// 設定済み DM シークレット（None の場合 DM 入室は常に失敗）
    dm_secret: Option<String>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, dm_secret: Option<String>) -> Self {
        Self {
            repository,
            dm_secret,
        }
    }

    /// 入室を実行
    ///
    /// 検証順序は仕様上意味を持つ：
    /// (1) DM の場合シークレット検証 →（2）定員チェック →（3）DM 重複チェック。
    /// シークレット不一致は部屋が満室でも `InvalidDmSecret` を返す。
    pub async fn execute(
        &self,
        client_id: ClientId,
        request: JoinRequest,
    ) -> Result<JoinOutcome, JoinError> {
        // 0. この接続が既に入室していないか
        if self.repository.find_user(&client_id).await.is_some() {
            return Err(JoinError::AlreadyJoined);
        }

        let name = UserName::new(request.name)
            .map_err(|e| JoinError::InvalidRequest(e.to_string()))?;
        let role: Role = request
            .role
            .parse()
            .map_err(|_| JoinError::InvalidRequest("Invalid role.".to_string()))?;

        // 1. DM シークレット検証（定員チェックより先）
        if role == Role::Dm {
            match (&self.dm_secret, &request.secret) {
                (Some(expected), Some(given)) if expected == given => {}
                _ => return Err(JoinError::InvalidDmSecret),
            }
        }

        // 2. 参加者を作成して入室（定員・DM 重複チェックは Room が行う）
        let joined_at = Timestamp::new(get_jst_timestamp());
        let user = match role {
            Role::Dm => User::new_dm(client_id.clone(), name, joined_at),
            Role::Player => User::new_player(
                client_id.clone(),
                name,
                joined_at,
                request.max_health,
                request.current_health,
            ),
        };
        let user = self.repository.admit_user(user).await?;

        // 3. 応答とブロードキャストに必要な状態を収集
        let users = self.repository.list_users().await;
        let history = self.repository.roll_history_for_role(user.role).await;
        let hide_rolls = self.repository.hide_rolls_enabled().await;
        let broadcast_targets = users
            .iter()
            .map(|u| u.id.clone())
            .filter(|id| id != &client_id)
            .collect();

        tracing::info!(
            "User joined: {} ({})",
            user.name.as_str(),
            user.role.as_str()
        );

        Ok(JoinOutcome {
            user,
            users,
            history,
            hide_rolls,
            broadcast_targets,
        })
    }
}
