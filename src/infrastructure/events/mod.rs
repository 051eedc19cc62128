//! Events Layer - 播放器事件广播

mod publisher;

pub use publisher::{EventPublisher, PlayerEvent};
