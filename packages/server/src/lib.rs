//! WebSocket dice room server library.
//!
//! This library provides the server implementation for a single-room
//! dice-rolling application with DM-hidden rolls and player health tracking.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
