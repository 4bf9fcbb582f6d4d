//! エンティティ定義

mod roll;
mod room;
mod user;

pub use roll::{RedactedRoll, Roll, RollDraft, RollHistory};
pub use room::Room;
pub use user::{Health, User};
