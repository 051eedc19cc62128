//! Ping Handler
//!
//! 健康检查，附带会话概况

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::domain::playback::PlaybackState;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub playback: PlaybackState,
    pub observers: usize,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        playback: state.session.playback_state(),
        observers: state.event_publisher.observer_count(),
    })
}
