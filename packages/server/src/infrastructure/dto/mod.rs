//! Data Transfer Objects (DTOs) for the dice room application.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket message DTOs (inbound events and outbound messages)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
