//! Roll エンティティと Roll 履歴
//!
//! ロール記録は作成後に変更されない追記専用のレコードです。
//! 記録にはローラーの表示名とロールのスナップショットを保持するため、
//! 後から参加者が変わっても履歴は書き換わりません。

use saikoro_shared::time::get_jst_timestamp;

use crate::domain::value_object::{DieType, Role, RollId, RollIdFactory, Timestamp, UserName};

/// 履歴へ追加する前のロール記録
///
/// ID の採番とタイムスタンプのデフォルト補完は `RollHistory::record` が行います。
#[derive(Debug, Clone)]
pub struct RollDraft {
    pub user_name: UserName,
    pub role: Role,
    pub die_type: DieType,
    pub result: u32,
    pub hidden: bool,
    /// None の場合は記録時刻が使われる
    pub timestamp: Option<Timestamp>,
}

/// 確定したロール記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub id: RollId,
    pub user_name: UserName,
    pub role: Role,
    pub die_type: DieType,
    pub result: u32,
    pub hidden: bool,
    pub timestamp: Timestamp,
}

impl Roll {
    /// 指定されたロールの閲覧者向けに結果を秘匿したビューを作成
    ///
    /// hidden なロールの結果は DM 以外には `None`（未知のセンチネル）になります。
    pub fn redact_for(&self, viewer: Role) -> RedactedRoll {
        let result = if self.hidden && viewer != Role::Dm {
            None
        } else {
            Some(self.result)
        };
        RedactedRoll {
            id: self.id.clone(),
            user_name: self.user_name.clone(),
            role: self.role,
            die_type: self.die_type,
            result,
            hidden: self.hidden,
            timestamp: self.timestamp,
        }
    }

    /// 秘匿なしのビューを作成
    ///
    /// ローラー自身への送信用。hidden なロールでも本人は常に真の結果を見ます。
    pub fn unredacted(&self) -> RedactedRoll {
        RedactedRoll {
            id: self.id.clone(),
            user_name: self.user_name.clone(),
            role: self.role,
            die_type: self.die_type,
            result: Some(self.result),
            hidden: self.hidden,
            timestamp: self.timestamp,
        }
    }
}

/// 閲覧者向けに結果を秘匿した可能性のあるロール記録のビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedRoll {
    pub id: RollId,
    pub user_name: UserName,
    pub role: Role,
    pub die_type: DieType,
    /// 秘匿されている場合は None
    pub result: Option<u32>,
    pub hidden: bool,
    pub timestamp: Timestamp,
}

/// Roll 履歴（追記専用）
///
/// プロセスのライフタイムが保持期間。レコードの削除・変更はありません。
#[derive(Debug, Clone, Default)]
pub struct RollHistory {
    rolls: Vec<Roll>,
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// ロール記録を履歴の末尾へ追加
    ///
    /// ID を採番し、タイムスタンプ未指定の場合は現在時刻を補完します。
    /// 追加された記録のコピーを返すため、呼び出し側から履歴内部は変更できません。
    pub fn record(&mut self, draft: RollDraft) -> Roll {
        let roll = Roll {
            id: RollIdFactory::generate(),
            user_name: draft.user_name,
            role: draft.role,
            die_type: draft.die_type,
            result: draft.result,
            hidden: draft.hidden,
            timestamp: draft
                .timestamp
                .unwrap_or_else(|| Timestamp::new(get_jst_timestamp())),
        };
        self.rolls.push(roll.clone());
        roll
    }

    /// 全ロール記録のスナップショットを挿入順で返す
    pub fn all(&self) -> Vec<Roll> {
        self.rolls.clone()
    }

    /// 指定ロールの閲覧者向けの履歴ビューを挿入順で返す
    ///
    /// hidden なロールの結果は DM 以外には秘匿されます。
    /// 新規接続・新規入室クライアントへの履歴送信には必ずこのビューを使います。
    /// 入室前に作られた hidden なロールの結果も DM 以外には見せません。
    pub fn for_role(&self, viewer: Role) -> Vec<RedactedRoll> {
        self.rolls.iter().map(|roll| roll.redact_for(viewer)).collect()
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}
