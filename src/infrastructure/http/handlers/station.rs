//! Station Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::playback::StationInfo;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /api/station
///
/// 返回最近一次加载的电台信息；电台配置从未成功加载时返回 404
pub async fn get_station(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StationInfo>>, ApiError> {
    let info = state
        .session
        .station_info()
        .ok_or_else(|| ApplicationError::not_found("Station", "current"))?;

    Ok(Json(ApiResponse::success(info)))
}
