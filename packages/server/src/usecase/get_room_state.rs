//! UseCase: 部屋の状態取得（デバッグ用エンドポイント向け）

use std::sync::Arc;

use crate::domain::{Room, RoomRepository};

/// 部屋の状態取得のユースケース
pub struct GetRoomStateUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    /// 新しい GetRoomStateUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 部屋全体のスナップショットを取得
    pub async fn execute(&self) -> Room {
        self.repository.room_snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    use crate::domain::value_object::{ClientId, Timestamp, UserName};
    use crate::domain::User;
    use crate::infrastructure::repository::InMemoryRoomRepository;

    #[tokio::test]
    async fn test_snapshot_reflects_current_room() {
        // テスト項目: スナップショットに現在の参加者が反映される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new(Arc::new(Mutex::new(
            Room::new(),
        ))));
        let user = User::new_player(
            ClientId::generate(),
            UserName::new("Alice".to_string()).unwrap(),
            Timestamp::new(1000),
            None,
            None,
        );
        repository.admit_user(user).await.unwrap();
        let usecase = GetRoomStateUseCase::new(repository);

        // when (操作):
        let room = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(room.user_count(), 1);
        assert_eq!(room.users()[0].name.as_str(), "Alice");
    }
}
