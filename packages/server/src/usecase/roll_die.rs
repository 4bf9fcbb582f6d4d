//! UseCase: ダイスロール処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RollDieUseCase::execute() メソッド
//! - ロール生成（未入室チェック、ダイス種別検証、hidden 判定、履歴への記録）
//!
//! ### なぜこのテストが必要か
//! - 可視性ポリシーの中核：hidden 判定は「ローラーが DM」かつ
//!   「秘匿フラグ有効」のときのみ真になる
//! - 不正なダイス種別がエラーになり、履歴に記録されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：プレイヤーのロール、DM の通常ロール、DM の hidden ロール
//! - 異常系：未入室、カタログ外のダイス種別

use std::sync::Arc;

use saikoro_shared::time::get_jst_timestamp;

use crate::domain::{
    ClientId, DieRoller, DieType, Role, Roll, RollDraft, RoomRepository, Timestamp,
};

use super::error::RollError;

/// ロール成功時の結果
#[derive(Debug)]
pub struct RollOutcome {
    /// 記録されたロール（秘匿なしの生レコード）
    pub roll: Roll,
    /// roll-result を送るべき接続（ローラー本人を除く全参加者）
    pub broadcast_targets: Vec<ClientId>,
}

/// ダイスロールのユースケース
pub struct RollDieUseCase {
    repository: Arc<dyn RoomRepository>,
    die_roller: Arc<dyn DieRoller>,
}

impl RollDieUseCase {
    /// 新しい RollDieUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, die_roller: Arc<dyn DieRoller>) -> Self {
        Self {
            repository,
            die_roller,
        }
    }

    /// ダイスロールを実行
    ///
    /// hidden はロール時点のフラグ値から決まり、以後変化しません。
    pub async fn execute(
        &self,
        client_id: &ClientId,
        die_type: &str,
    ) -> Result<RollOutcome, RollError> {
        // 1. 入室チェック
        let user = self
            .repository
            .find_user(client_id)
            .await
            .ok_or(RollError::NotJoined)?;

        // 2. ダイス種別の検証（大文字小文字は区別しない）
        let die: DieType = die_type.parse().map_err(|_| RollError::InvalidDieType)?;

        // 3. 出目の生成と hidden 判定
        let result = self.die_roller.roll(die);
        let hidden = user.role == Role::Dm && self.repository.hide_rolls_enabled().await;

        // 4. 履歴へ記録
        let roll = self
            .repository
            .record_roll(RollDraft {
                user_name: user.name.clone(),
                role: user.role,
                die_type: die,
                result,
                hidden,
                timestamp: Some(Timestamp::new(get_jst_timestamp())),
            })
            .await;

        let broadcast_targets = self
            .repository
            .list_users()
            .await
            .into_iter()
            .map(|u| u.id)
            .filter(|id| id != client_id)
            .collect();

        tracing::info!(
            "Roll: {} rolled {} = {}{}",
            user.name.as_str(),
            die.as_str(),
            result,
            if hidden { " (hidden)" } else { "" }
        );

        Ok(RollOutcome {
            roll,
            broadcast_targets,
        })
    }
}
