//! Room エンティティ（集約ルート）
//!
//! 部屋の不変条件をこのエンティティが一手に守ります：
//! - 参加者は最大 5 人
//! - DM は同時に 1 人まで
//! - `dm_hide_rolls` は DM 退室時に必ず false へ戻る

use super::roll::{Roll, RollDraft, RollHistory};
use super::user::User;
use crate::domain::error::RoomError;
use crate::domain::value_object::ClientId;

/// サイコロ部屋
///
/// プロセスごとに 1 つ。参加者の名簿・DM の結果秘匿フラグ・ロール履歴を持ちます。
#[derive(Debug, Clone, Default)]
pub struct Room {
    /// 参加者（挿入順を保持）
    users: Vec<User>,
    /// DM が自分のロール結果を秘匿しているか（DM 不在時は常に false）
    dm_hide_rolls: bool,
    /// ロール履歴
    history: RollHistory,
}

impl Room {
    /// 部屋の最大参加人数
    pub const MAX_USERS: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// 参加者を入室させる
    ///
    /// 検証順序は (1) 定員チェック → (2) DM 重複チェック。
    /// DM シークレットの検証は UseCase 層がこの呼び出しより前に行います。
    /// 失敗時は部屋の状態を一切変更しません。
    pub fn admit(&mut self, user: User) -> Result<User, RoomError> {
        if self.users.len() >= Self::MAX_USERS {
            return Err(RoomError::RoomFull);
        }
        if user.is_dm() && self.users.iter().any(User::is_dm) {
            return Err(RoomError::DmAlreadyPresent);
        }
        self.users.push(user.clone());
        Ok(user)
    }

    /// 参加者を退室させる（冪等）
    ///
    /// 退室した参加者が DM の場合、`dm_hide_rolls` を false に戻します。
    /// 参加者でない ID を渡した場合は何もせず None を返します。
    pub fn withdraw(&mut self, client_id: &ClientId) -> Option<User> {
        let index = self.users.iter().position(|u| &u.id == client_id)?;
        let user = self.users.remove(index);
        if user.is_dm() {
            self.dm_hide_rolls = false;
        }
        Some(user)
    }

    pub fn find_user(&self, client_id: &ClientId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == client_id)
    }

    /// 参加者一覧を挿入順で返す
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn set_hide_rolls(&mut self, hide: bool) {
        self.dm_hide_rolls = hide;
    }

    /// 秘匿フラグを反転し、新しい値を返す
    pub fn toggle_hide_rolls(&mut self) -> bool {
        self.dm_hide_rolls = !self.dm_hide_rolls;
        self.dm_hide_rolls
    }

    pub fn hide_rolls_enabled(&self) -> bool {
        self.dm_hide_rolls
    }

    /// プレイヤーの HP を更新する
    ///
    /// 参加者が存在しロールがプレイヤーの場合のみ更新し、更新後の参加者を返します。
    /// 値は `[0, max]` にクランプされます。
    pub fn update_health(&mut self, client_id: &ClientId, new_health: i32) -> Option<User> {
        let user = self.users.iter_mut().find(|u| &u.id == client_id)?;
        let health = user.health.as_mut()?;
        health.set_current(new_health);
        Some(user.clone())
    }

    /// ロール記録を履歴へ追加する
    pub fn record_roll(&mut self, draft: RollDraft) -> Roll {
        self.history.record(draft)
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Timestamp, UserName};

    fn player(name: &str) -> User {
        User::new_player(
            ClientId::generate(),
            UserName::new(name.to_string()).unwrap(),
            Timestamp::new(1000),
            None,
            None,
        )
    }

    fn dm(name: &str) -> User {
        User::new_dm(
            ClientId::generate(),
            UserName::new(name.to_string()).unwrap(),
            Timestamp::new(1000),
        )
    }

    #[test]
    fn test_admit_enforces_capacity() {
        // テスト項目: 定員 5 人を超える入室は RoomFull で拒否される
        // given (前提条件):
        let mut room = Room::new();
        for i in 0..Room::MAX_USERS {
            room.admit(player(&format!("Player{i}"))).unwrap();
        }

        // when (操作):
        let result = room.admit(player("Latecomer"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomFull));
        assert_eq!(room.user_count(), Room::MAX_USERS);
    }

    #[test]
    fn test_admit_rejects_second_dm() {
        // テスト項目: DM が既にいる部屋へ 2 人目の DM は入室できない
        // given (前提条件):
        let mut room = Room::new();
        room.admit(dm("First")).unwrap();

        // when (操作):
        let result = room.admit(dm("Second"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::DmAlreadyPresent));
        assert_eq!(room.user_count(), 1);
    }

    #[test]
    fn test_admit_checks_capacity_before_dm_uniqueness() {
        // テスト項目: 満室の部屋では DM 重複より先に RoomFull が返る
        // given (前提条件):
        let mut room = Room::new();
        room.admit(dm("First")).unwrap();
        for i in 0..4 {
            room.admit(player(&format!("Player{i}"))).unwrap();
        }

        // when (操作):
        let result = room.admit(dm("Second"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomFull));
    }

    #[test]
    fn test_users_preserve_insertion_order() {
        // テスト項目: 参加者一覧が挿入順で返る
        // given (前提条件):
        let mut room = Room::new();

        // when (操作):
        room.admit(player("Alice")).unwrap();
        room.admit(player("Bob")).unwrap();
        room.admit(player("Carol")).unwrap();

        // then (期待する結果):
        let names: Vec<&str> = room.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_withdraw_is_idempotent() {
        // テスト項目: 参加者でない ID の退室は何も変更しない（冪等性）
        // given (前提条件):
        let mut room = Room::new();
        room.admit(player("Alice")).unwrap();

        // when (操作):
        let result = room.withdraw(&ClientId::generate());

        // then (期待する結果):
        assert!(result.is_none());
        assert_eq!(room.user_count(), 1);
    }

    #[test]
    fn test_withdraw_dm_resets_hide_rolls() {
        // テスト項目: DM の退室で dm_hide_rolls が false に戻る
        // given (前提条件):
        let mut room = Room::new();
        let admitted = room.admit(dm("Narrator")).unwrap();
        room.set_hide_rolls(true);

        // when (操作):
        let withdrawn = room.withdraw(&admitted.id);

        // then (期待する結果):
        assert!(withdrawn.is_some());
        assert!(!room.hide_rolls_enabled());
    }

    #[test]
    fn test_withdraw_player_keeps_hide_rolls() {
        // テスト項目: プレイヤーの退室では秘匿フラグが維持される
        // given (前提条件):
        let mut room = Room::new();
        room.admit(dm("Narrator")).unwrap();
        let admitted = room.admit(player("Alice")).unwrap();
        room.set_hide_rolls(true);

        // when (操作):
        room.withdraw(&admitted.id);

        // then (期待する結果):
        assert!(room.hide_rolls_enabled());
    }

    #[test]
    fn test_toggle_hide_rolls_flips_flag() {
        // テスト項目: toggle_hide_rolls がフラグを反転して新しい値を返す
        // given (前提条件):
        let mut room = Room::new();

        // when (操作) / then (期待する結果):
        assert!(room.toggle_hide_rolls());
        assert!(room.hide_rolls_enabled());
        assert!(!room.toggle_hide_rolls());
        assert!(!room.hide_rolls_enabled());
    }

    #[test]
    fn test_update_health_clamps_value() {
        // テスト項目: HP 更新が [0, max] にクランプされる
        // given (前提条件):
        let mut room = Room::new();
        let admitted = room.admit(player("Alice")).unwrap();

        // when (操作):
        let updated = room.update_health(&admitted.id, -3).unwrap();

        // then (期待する結果):
        assert_eq!(updated.health.unwrap().current(), 0);
    }

    #[test]
    fn test_update_health_ignores_dm() {
        // テスト項目: DM への HP 更新は no-op になる
        // given (前提条件):
        let mut room = Room::new();
        let admitted = room.admit(dm("Narrator")).unwrap();

        // when (操作):
        let result = room.update_health(&admitted.id, 10);

        // then (期待する結果):
        assert!(result.is_none());
    }
}
