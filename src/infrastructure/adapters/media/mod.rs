//! 媒体后端适配器
//!
//! - HttpStreamBackend: 连接直播流的真实后端
//! - FakeMediaBackend: 测试/演练用后端

mod fake_media_backend;
mod http_stream_backend;

pub use fake_media_backend::{FakeMediaBackend, FakeMediaBackendConfig};
pub use http_stream_backend::{HttpStreamBackend, HttpStreamBackendConfig};
