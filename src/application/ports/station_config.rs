//! Station Config Port - 电台配置提供方
//!
//! 定义获取电台描述的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::playback::StationDescriptor;

/// 电台配置错误（配置不可用）
#[derive(Debug, Error)]
pub enum StationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Station descriptor has no playable stream_url")]
    MissingStreamUrl,
}

/// Station Config Port
///
/// 外部电台配置接口的抽象（GET，返回包含 `stream_url` 的 JSON）
#[async_trait]
pub trait StationConfigPort: Send + Sync {
    /// 获取电台描述
    async fn fetch_descriptor(&self) -> Result<StationDescriptor, StationError>;
}
