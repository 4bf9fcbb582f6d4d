//! Conversion logic between DTOs and domain entities.

use crate::domain::{RedactedRoll, User};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<User> for dto::UserDto {
    fn from(user: User) -> Self {
        let (max_health, current_health) = match user.health {
            Some(health) => (Some(health.max()), Some(health.current())),
            None => (None, None),
        };
        Self {
            id: user.id.into_string(),
            name: user.name.into_string(),
            role: user.role.as_str().to_string(),
            joined_at: user.joined_at.value(),
            max_health,
            current_health,
        }
    }
}

impl From<RedactedRoll> for dto::RollDto {
    fn from(roll: RedactedRoll) -> Self {
        Self {
            id: roll.id.as_str().to_string(),
            user_name: roll.user_name.into_string(),
            role: roll.role.as_str().to_string(),
            die_type: roll.die_type.as_str().to_string(),
            result: roll.result,
            hidden: roll.hidden,
            timestamp: roll.timestamp.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::value_object::{ClientId, DieType, Role, Timestamp, UserName};
    use crate::domain::{RollDraft, RollHistory, User};
    use crate::infrastructure::dto::websocket::{
        ClientMessage, ErrorMessage, HideRollsChangedMessage, RollResultMessage, UserDto,
    };

    fn test_player() -> User {
        User::new_player(
            ClientId::new("conn-1".to_string()).unwrap(),
            UserName::new("Alice".to_string()).unwrap(),
            Timestamp::new(1000),
            Some(30),
            Some(12),
        )
    }

    #[test]
    fn test_player_dto_serializes_health_in_camel_case() {
        // テスト項目: プレイヤーの DTO が camelCase の HP フィールド付きで直列化される
        // given (前提条件):
        let user = test_player();

        // when (操作):
        let value = serde_json::to_value(UserDto::from(user)).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "id": "conn-1",
                "name": "Alice",
                "role": "player",
                "joinedAt": 1000,
                "maxHealth": 30,
                "currentHealth": 12,
            })
        );
    }

    #[test]
    fn test_dm_dto_omits_health_fields() {
        // テスト項目: DM の DTO では HP フィールドが省略される
        // given (前提条件):
        let user = User::new_dm(
            ClientId::new("conn-2".to_string()).unwrap(),
            UserName::new("Narrator".to_string()).unwrap(),
            Timestamp::new(2000),
        );

        // when (操作):
        let value = serde_json::to_value(UserDto::from(user)).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "id": "conn-2",
                "name": "Narrator",
                "role": "dm",
                "joinedAt": 2000,
            })
        );
    }

    #[test]
    fn test_hidden_roll_result_serializes_as_null() {
        // テスト項目: 秘匿されたロール結果が result: null として直列化される
        // given (前提条件):
        let mut history = RollHistory::new();
        let roll = history.record(RollDraft {
            user_name: UserName::new("Narrator".to_string()).unwrap(),
            role: Role::Dm,
            die_type: DieType::D20,
            result: 17,
            hidden: true,
            timestamp: Some(Timestamp::new(3000)),
        });

        // when (操作):
        let value = serde_json::to_value(RollResultMessage::new(roll.redact_for(Role::Player)))
            .unwrap();

        // then (期待する結果):
        assert_eq!(value["type"], "roll-result");
        assert_eq!(value["result"], serde_json::Value::Null);
        assert_eq!(value["hidden"], true);
        assert_eq!(value["dieType"], "d20");
        assert_eq!(value["userName"], "Narrator");
    }

    #[test]
    fn test_roller_sees_own_hidden_result() {
        // テスト項目: ローラー本人向けのメッセージには hidden でも結果が含まれる
        // given (前提条件):
        let mut history = RollHistory::new();
        let roll = history.record(RollDraft {
            user_name: UserName::new("Narrator".to_string()).unwrap(),
            role: Role::Dm,
            die_type: DieType::D20,
            result: 17,
            hidden: true,
            timestamp: Some(Timestamp::new(3000)),
        });

        // when (操作):
        let value = serde_json::to_value(RollResultMessage::new(roll.unredacted())).unwrap();

        // then (期待する結果):
        assert_eq!(value["result"], 17);
        assert_eq!(value["hidden"], true);
    }

    #[test]
    fn test_hide_rolls_changed_message_shape() {
        // テスト項目: hide-rolls-changed メッセージが期待する JSON になる
        // given (前提条件):

        // when (操作):
        let value = serde_json::to_value(HideRollsChangedMessage::new(true)).unwrap();

        // then (期待する結果):
        assert_eq!(value, json!({"type": "hide-rolls-changed", "hideRolls": true}));
    }

    #[test]
    fn test_error_message_shape() {
        // テスト項目: エラーメッセージが type + message の形で直列化される
        // given (前提条件):

        // when (操作):
        let value = serde_json::to_value(ErrorMessage::roll_error("Invalid die type.")).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({"type": "roll-error", "message": "Invalid die type."})
        );
    }

    #[test]
    fn test_inbound_join_message_parses() {
        // テスト項目: join イベントの JSON が ClientMessage::Join にパースされる
        // given (前提条件):
        let raw = r#"{"type":"join","name":"Alice","role":"player","maxHealth":25}"#;

        // when (操作):
        let message: ClientMessage = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        match message {
            ClientMessage::Join(payload) => {
                assert_eq!(payload.name, "Alice");
                assert_eq!(payload.role, "player");
                assert_eq!(payload.max_health, Some(25));
                assert_eq!(payload.current_health, None);
                assert_eq!(payload.secret, None);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_inbound_toggle_message_parses() {
        // テスト項目: ペイロードなしの toggle-hide-rolls イベントがパースされる
        // given (前提条件):
        let raw = r#"{"type":"toggle-hide-rolls"}"#;

        // when (操作):
        let message: ClientMessage = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        assert!(matches!(message, ClientMessage::ToggleHideRolls));
    }

    #[test]
    fn test_inbound_roll_message_parses() {
        // テスト項目: roll イベントの dieType がそのまま文字列として渡る
        // given (前提条件):
        let raw = r#"{"type":"roll","dieType":"D20"}"#;

        // when (操作):
        let message: ClientMessage = serde_json::from_str(raw).unwrap();

        // then (期待する結果):
        match message {
            ClientMessage::Roll(payload) => assert_eq!(payload.die_type, "D20"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_inbound_unknown_type_fails_to_parse() {
        // テスト項目: 未知のイベント種別はパースエラーになる
        // given (前提条件):
        let raw = r#"{"type":"teleport"}"#;

        // when (操作):
        let result = serde_json::from_str::<ClientMessage>(raw);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
