//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! Room 集約全体を 1 つの `Mutex` で保護するため、定員チェックや
//! 秘匿フラグの反転といった check-then-act が他の操作と交錯しません。
//! どのメソッドもロック保持中に await しないこと。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ClientId, RedactedRoll, Role, Roll, RollDraft, Room, RoomError, RoomRepository, User,
};

/// インメモリ Room Repository 実装
///
/// Room ドメインモデルを保持し、ドメイン層の RoomRepository trait を実装します。
pub struct InMemoryRoomRepository {
    room: Arc<Mutex<Room>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room: Arc<Mutex<Room>>) -> Self {
        Self { room }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn admit_user(&self, user: User) -> Result<User, RoomError> {
        let mut room = self.room.lock().await;
        room.admit(user)
    }

    async fn withdraw_user(&self, client_id: &ClientId) -> Option<User> {
        let mut room = self.room.lock().await;
        room.withdraw(client_id)
    }

    async fn find_user(&self, client_id: &ClientId) -> Option<User> {
        let room = self.room.lock().await;
        room.find_user(client_id).cloned()
    }

    async fn list_users(&self) -> Vec<User> {
        let room = self.room.lock().await;
        room.users().to_vec()
    }

    async fn count_users(&self) -> usize {
        let room = self.room.lock().await;
        room.user_count()
    }

    async fn toggle_hide_rolls(&self) -> bool {
        let mut room = self.room.lock().await;
        room.toggle_hide_rolls()
    }

    async fn hide_rolls_enabled(&self) -> bool {
        let room = self.room.lock().await;
        room.hide_rolls_enabled()
    }

    async fn update_health(&self, client_id: &ClientId, new_health: i32) -> Option<User> {
        let mut room = self.room.lock().await;
        room.update_health(client_id, new_health)
    }

    async fn record_roll(&self, draft: RollDraft) -> Roll {
        let mut room = self.room.lock().await;
        room.record_roll(draft)
    }

    async fn roll_history(&self) -> Vec<Roll> {
        let room = self.room.lock().await;
        room.history().all()
    }

    async fn roll_history_for_role(&self, viewer: Role) -> Vec<RedactedRoll> {
        let room = self.room.lock().await;
        room.history().for_role(viewer)
    }

    async fn room_snapshot(&self) -> Room {
        let room = self.room.lock().await;
        room.clone()
    }
}
