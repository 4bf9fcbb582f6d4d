//! UseCase: 接続確立処理
//!
//! トランスポートが接続を受け付けた時点（入室前）の処理。
//! 送信チャンネルを MessagePusher へ登録し、新しい接続へ送る
//! 履歴ビューを返します。

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, PusherChannel, RedactedRoll, Role, RoomRepository};

/// 接続確立のユースケース
pub struct ConnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 接続確立を実行
    ///
    /// 入室前の接続はロール不明のため、履歴は非 DM 向けの秘匿ビューで返す。
    /// 入室前のクライアントに hidden なロールの結果を見せてはならない。
    pub async fn execute(&self, client_id: ClientId, sender: PusherChannel) -> Vec<RedactedRoll> {
        self.message_pusher
            .register_client(client_id.clone(), sender)
            .await;
        tracing::info!("Client '{}' connected and registered", client_id);

        self.repository.roll_history_for_role(Role::Player).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use tokio::sync::{mpsc, Mutex};

    use crate::domain::value_object::{DieType, Timestamp, UserName};
    use crate::domain::{RollDraft, Room};
    use crate::infrastructure::message_pusher::WebSocketMessagePusher;
    use crate::infrastructure::repository::InMemoryRoomRepository;

    fn create_test_repository() -> Arc<InMemoryRoomRepository> {
        Arc::new(InMemoryRoomRepository::new(Arc::new(Mutex::new(
            Room::new(),
        ))))
    }

    fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
        Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))))
    }

    #[tokio::test]
    async fn test_connect_registers_client_and_returns_redacted_history() {
        // テスト項目: 接続時に送信チャンネルが登録され、履歴が秘匿ビューで返る
        // given (前提条件):
        let repository = create_test_repository();
        let message_pusher = create_test_message_pusher();
        repository
            .record_roll(RollDraft {
                user_name: UserName::new("Narrator".to_string()).unwrap(),
                role: crate::domain::Role::Dm,
                die_type: DieType::D20,
                result: 17,
                hidden: true,
                timestamp: Some(Timestamp::new(1000)),
            })
            .await;
        let usecase =
            ConnectClientUseCase::new(repository.clone(), message_pusher.clone());
        let client_id = ClientId::generate();
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        let history = usecase.execute(client_id.clone(), tx).await;

        // then (期待する結果): 入室前の接続に hidden なロールの結果は見えない
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].result, None);
        assert!(history[0].hidden);

        // then (期待する結果): チャンネルが登録され、push_to で届く
        message_pusher.push_to(&client_id, "hello").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }
}
