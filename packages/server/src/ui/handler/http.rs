//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use saikoro_shared::time::get_jst_timestamp;

use crate::{infrastructure::dto::http::RoomStateDto, ui::state::AppState};

/// Debug endpoint to get current room state (for testing purposes)
pub async fn debug_room_state(State(state): State<Arc<AppState>>) -> Json<RoomStateDto> {
    let room = state.get_room_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(RoomStateDto::from_room(&room))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": get_jst_timestamp(),
    }))
}
