//! Shared utilities for the Saikoro dice-room application.
//!
//! Cross-cutting concerns used by the server (and any future client):
//! time handling and logging setup.

pub mod logger;
pub mod time;
