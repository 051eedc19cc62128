//! Media Backend Port - 媒体输出抽象
//!
//! 会话管理器是唯一的写入方；媒体后端只负责执行命令并上报外部事件

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::playback::Volume;

/// 媒体错误
#[derive(Debug, Error)]
pub enum MediaError {
    /// 平台拒绝开始播放（如自动播放限制）
    #[error("Playback rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unsupported media: {0}")]
    Unsupported(String),

    #[error("No media source set")]
    NoSource,
}

/// 媒体后端主动上报的事件
///
/// `Playing` / `Paused` 只由带外部播放控制的后端上报（如系统媒体键）；
/// 只受会话控制的后端只会上报 `Ended` 和 `Error`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum MediaEvent {
    /// 媒体开始推进
    Playing,
    /// 媒体被外部暂停
    Paused,
    /// 流结束
    Ended,
    /// 媒体错误
    Error(String),
}

/// Media Backend Port
#[async_trait]
pub trait MediaBackendPort: Send + Sync {
    /// 设置媒体源
    fn set_source(&self, url: &str);

    /// 开始播放，结果在媒体真正开始后才返回
    async fn play(&self) -> Result<(), MediaError>;

    /// 暂停
    fn pause(&self);

    /// 立即应用输出音量
    ///
    /// 没有本地音频输出的后端只记录该值，由接收端按快照中的音量渲染。
    fn set_volume(&self, volume: Volume);
}
