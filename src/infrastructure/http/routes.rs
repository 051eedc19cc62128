//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/player/state        GET   播放器状态快照
//! - /api/player/toggle       POST  播放/暂停切换
//! - /api/player/volume       POST  设置音量
//! - /api/player/mute         POST  静音切换
//! - /api/player/retry        POST  手动重试流地址解析
//! - /api/station             GET   电台信息
//! - /api/pagination/window   GET   分页窗口
//! - /ws/player               WS    播放器事件推送

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/player", get(handlers::player_websocket_handler))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/player", player_routes())
        .route("/station", get(handlers::get_station))
        .route("/pagination/window", get(handlers::page_window))
}

/// Player 路由
fn player_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/state", get(handlers::get_player_state))
        .route("/toggle", post(handlers::toggle_play))
        .route("/volume", post(handlers::set_volume))
        .route("/mute", post(handlers::toggle_mute))
        .route("/retry", post(handlers::retry_resolution))
}
