//! Infrastructure 層
//!
//! ドメイン層が定義するインターフェースの具体的な実装と、
//! プロトコル境界の DTO を提供します。

pub mod dice;
pub mod dto;
pub mod message_pusher;
pub mod repository;
