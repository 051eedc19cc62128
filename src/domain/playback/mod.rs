//! Playback Context - 播放限界上下文
//!
//! 职责:
//! - 音量值对象（钳制、持久化格式）
//! - 播放状态机
//! - 电台描述解析（stream_url 的两种形态）

mod state;
mod station;
mod value_objects;

pub use state::PlaybackState;
pub use station::{resolve_stream_url, StationDescriptor, StationInfo};
pub use value_objects::{Volume, VOLUME_KEY};
