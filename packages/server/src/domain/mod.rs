//! ドメイン層
//!
//! サイコロ部屋のビジネスルールを表現する層。
//! 値オブジェクト・エンティティ・ドメインエラーに加えて、
//! Infrastructure 層が実装するインターフェース（Repository / MessagePusher /
//! DieRoller）をドメイン層自身が定義します（依存性の逆転）。

pub mod dice;
pub mod entity;
pub mod error;
pub mod pusher;
pub mod repository;
pub mod value_object;

pub use dice::DieRoller;
pub use entity::{Health, RedactedRoll, Roll, RollDraft, RollHistory, Room, User};
pub use error::{MessagePushError, RoomError};
pub use pusher::{MessagePusher, PusherChannel};
pub use repository::RoomRepository;
pub use value_object::{ClientId, DieType, Role, RollId, Timestamp, UserName};
