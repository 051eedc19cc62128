//! HTTP Layer - RESTful API + WebSocket
//!
//! 向 UI 观察者暴露播放器会话与分页窗口

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
