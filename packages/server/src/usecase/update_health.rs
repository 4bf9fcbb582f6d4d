//! UseCase: HP 更新処理

use std::sync::Arc;

use crate::domain::{ClientId, Role, RoomRepository, User};

use super::error::HealthError;

/// HP 更新の結果
#[derive(Debug)]
pub struct HealthOutcome {
    /// 更新後の参加者
    pub user: User,
    /// 更新後の参加者一覧（挿入順）
    pub users: Vec<User>,
    /// health-updated を送るべき接続（要求元を含む全参加者）
    pub broadcast_targets: Vec<ClientId>,
}

/// HP 更新のユースケース
pub struct UpdateHealthUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl UpdateHealthUseCase {
    /// 新しい UpdateHealthUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// HP 更新を実行
    ///
    /// 入室済みのプレイヤーのみが実行できる。値は `[0, max]` に
    /// クランプされるため、ロールチェックを通過すれば必ず成功する。
    pub async fn execute(
        &self,
        client_id: &ClientId,
        new_health: i32,
    ) -> Result<HealthOutcome, HealthError> {
        let user = self
            .repository
            .find_user(client_id)
            .await
            .ok_or(HealthError::Unauthorized)?;
        if user.role != Role::Player {
            return Err(HealthError::Unauthorized);
        }

        let user = self
            .repository
            .update_health(client_id, new_health)
            .await
            .ok_or(HealthError::Unauthorized)?;

        let users = self.repository.list_users().await;
        let broadcast_targets = users.iter().map(|u| u.id.clone()).collect();

        if let Some(health) = user.health {
            tracing::info!(
                "Health update: {} now has {}/{} HP",
                user.name.as_str(),
                health.current(),
                health.max()
            );
        }

        Ok(HealthOutcome {
            user,
            users,
            broadcast_targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    use crate::domain::value_object::{Timestamp, UserName};
    use crate::domain::Room;
    use crate::infrastructure::repository::InMemoryRoomRepository;

    fn create_test_repository() -> Arc<InMemoryRoomRepository> {
        Arc::new(InMemoryRoomRepository::new(Arc::new(Mutex::new(
            Room::new(),
        ))))
    }

    async fn admit_player_with_health(
        repository: &InMemoryRoomRepository,
        max: i32,
        current: i32,
    ) -> ClientId {
        let user = User::new_player(
            ClientId::generate(),
            UserName::new("Alice".to_string()).unwrap(),
            Timestamp::new(1000),
            Some(max),
            Some(current),
        );
        repository.admit_user(user).await.unwrap().id
    }

    #[tokio::test]
    async fn test_negative_health_is_clamped_to_zero() {
        // テスト項目: 負の HP 更新は 0 にクランプされて保存される
        // given (前提条件):
        let repository = create_test_repository();
        let client_id = admit_player_with_health(&repository, 20, 5).await;
        let usecase = UpdateHealthUseCase::new(repository.clone());

        // when (操作):
        let outcome = usecase.execute(&client_id, -3).await.unwrap();

        // then (期待する結果):
        assert_eq!(outcome.user.health.unwrap().current(), 0);
        let stored = repository.find_user(&client_id).await.unwrap();
        assert_eq!(stored.health.unwrap().current(), 0);
    }

    #[tokio::test]
    async fn test_health_above_max_is_clamped_to_max() {
        // テスト項目: 最大 HP を超える更新は max にクランプされる
        // given (前提条件):
        let repository = create_test_repository();
        let client_id = admit_player_with_health(&repository, 20, 5).await;
        let usecase = UpdateHealthUseCase::new(repository.clone());

        // when (操作):
        let outcome = usecase.execute(&client_id, 99).await.unwrap();

        // then (期待する結果):
        assert_eq!(outcome.user.health.unwrap().current(), 20);
    }

    #[tokio::test]
    async fn test_dm_cannot_update_health() {
        // テスト項目: DM からの HP 更新は Unauthorized になる
        // given (前提条件):
        let repository = create_test_repository();
        let dm = User::new_dm(
            ClientId::generate(),
            UserName::new("Narrator".to_string()).unwrap(),
            Timestamp::new(1000),
        );
        let dm_id = repository.admit_user(dm).await.unwrap().id;
        let usecase = UpdateHealthUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&dm_id, 10).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), HealthError::Unauthorized);
    }

    #[tokio::test]
    async fn test_unjoined_connection_cannot_update_health() {
        // テスト項目: 未入室の接続からの HP 更新は Unauthorized になる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = UpdateHealthUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&ClientId::generate(), 10).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), HealthError::Unauthorized);
    }

    #[tokio::test]
    async fn test_broadcast_targets_include_all_members() {
        // テスト項目: broadcast_targets に全参加者（要求元含む）が含まれる
        // given (前提条件):
        let repository = create_test_repository();
        let alice = admit_player_with_health(&repository, 20, 20).await;
        let bob = User::new_player(
            ClientId::generate(),
            UserName::new("Bob".to_string()).unwrap(),
            Timestamp::new(1000),
            None,
            None,
        );
        let bob_id = repository.admit_user(bob).await.unwrap().id;
        let usecase = UpdateHealthUseCase::new(repository.clone());

        // when (操作):
        let outcome = usecase.execute(&alice, 10).await.unwrap();

        // then (期待する結果):
        assert!(outcome.broadcast_targets.contains(&alice));
        assert!(outcome.broadcast_targets.contains(&bob_id));
        assert_eq!(outcome.broadcast_targets.len(), 2);
    }
}
