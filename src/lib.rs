//! Radiodeck - 电台直播播放服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Playback: 播放状态、音量、电台描述
//! - Pagination: 列表分页窗口
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StationConfig, MediaBackend, PreferenceStore）
//! - Session: 全局音频会话
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket
//! - Adapters: 电台配置客户端、媒体后端
//! - Persistence: Sled 偏好存储
//! - Memory: 内存偏好存储
//! - Events: 播放器事件广播

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
