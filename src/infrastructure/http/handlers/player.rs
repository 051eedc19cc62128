//! Player Handlers
//!
//! 播放器命令都委托给全局音频会话

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ApplicationError, PlayerSnapshot};
use crate::infrastructure::http::dto::{
    ApiResponse, RetryResponse, SetVolumeRequest, VolumeResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /api/player/state
pub async fn get_player_state(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<PlayerSnapshot>> {
    Json(ApiResponse::success(state.session.snapshot()))
}

/// POST /api/player/toggle
///
/// 流地址未解析或播放启动中时为无操作，直接返回当前快照
pub async fn toggle_play(State(state): State<Arc<AppState>>) -> Json<ApiResponse<PlayerSnapshot>> {
    let snapshot = state.session.toggle_play().await;
    Json(ApiResponse::success(snapshot))
}

/// POST /api/player/volume
pub async fn set_volume(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetVolumeRequest>,
) -> Result<Json<ApiResponse<VolumeResponse>>, ApiError> {
    if !req.volume.is_finite() {
        return Err(ApplicationError::validation("volume must be a finite number").into());
    }

    let volume = state.session.set_volume(req.volume);
    Ok(Json(ApiResponse::success(volume.into())))
}

/// POST /api/player/mute
pub async fn toggle_mute(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VolumeResponse>> {
    let volume = state.session.toggle_mute();
    Json(ApiResponse::success(volume.into()))
}

/// POST /api/player/retry
///
/// 手动重新请求电台配置；已解析时直接返回现有地址
pub async fn retry_resolution(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<RetryResponse>> {
    let stream_url = state.session.retry_resolution().await;
    Json(ApiResponse::success(RetryResponse {
        resolved: stream_url.is_some(),
        stream_url,
    }))
}
