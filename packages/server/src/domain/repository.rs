//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::entity::{RedactedRoll, Roll, RollDraft, Room, User};
use super::error::RoomError;
use super::value_object::{ClientId, Role};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
///
/// ## 直列化の保証
///
/// 実装は各メソッド呼び出しを 1 つの排他区間として実行しなければならない。
/// check-then-act（定員チェック + DM 重複チェック + 追加、秘匿フラグの
/// 反転、HP のクランプ）が途中で他の操作と交錯してはならない。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 参加者を入室させる
    ///
    /// 定員チェックと DM 重複チェックを含めて 1 つの排他区間で実行する。
    async fn admit_user(&self, user: User) -> Result<User, RoomError>;

    /// 参加者を退室させる（冪等）
    ///
    /// 退室者が DM の場合、秘匿フラグを false へ戻す。
    async fn withdraw_user(&self, client_id: &ClientId) -> Option<User>;

    /// 参加者を取得
    async fn find_user(&self, client_id: &ClientId) -> Option<User>;

    /// 参加者一覧を挿入順で取得
    async fn list_users(&self) -> Vec<User>;

    /// 参加者数を取得
    async fn count_users(&self) -> usize;

    /// DM の結果秘匿フラグを反転し、新しい値を返す
    async fn toggle_hide_rolls(&self) -> bool;

    /// DM の結果秘匿フラグを取得
    async fn hide_rolls_enabled(&self) -> bool;

    /// プレイヤーの HP を更新（クランプ込み）
    ///
    /// 参加者が存在しプレイヤーの場合のみ更新し、更新後の参加者を返す。
    async fn update_health(&self, client_id: &ClientId, new_health: i32) -> Option<User>;

    /// ロール記録を履歴へ追加し、確定した記録を返す
    async fn record_roll(&self, draft: RollDraft) -> Roll;

    /// 全ロール履歴のスナップショットを挿入順で取得
    async fn roll_history(&self) -> Vec<Roll>;

    /// 指定ロールの閲覧者向けに秘匿した履歴ビューを取得
    async fn roll_history_for_role(&self, viewer: Role) -> Vec<RedactedRoll>;

    /// 部屋全体のスナップショットを取得（デバッグ用エンドポイント向け）
    async fn room_snapshot(&self) -> Room;
}
