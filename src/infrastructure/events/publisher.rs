//! Event Publisher Implementation
//!
//! 播放器状态变更的广播实现（WebSocket 观察者订阅）

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::application::session::PlayerSnapshot;
use crate::domain::playback::{PlaybackState, Volume};

/// 默认广播缓冲区大小
const DEFAULT_CAPACITY: usize = 100;

/// 播放器事件类型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum PlayerEvent {
    /// 完整状态快照（观察者接入时发送）
    Snapshot(PlayerSnapshot),
    /// 流地址解析成功
    StreamResolved { stream_url: String },
    /// 流地址解析失败
    ResolutionFailed { error: String },
    /// 播放状态变更
    PlaybackChanged {
        state: PlaybackState,
        is_playing: bool,
    },
    /// 媒体拒绝播放
    PlaybackFailed { error: String },
    /// 音量变更
    VolumeChanged { volume: Volume, muted: bool },
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<PlayerEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅播放器事件
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.channel.subscribe()
    }

    /// 当前观察者数量
    pub fn observer_count(&self) -> usize {
        self.channel.receiver_count()
    }

    /// 发布流地址解析成功事件
    pub fn publish_stream_resolved(&self, stream_url: &str) {
        self.publish(PlayerEvent::StreamResolved {
            stream_url: stream_url.to_string(),
        });
    }

    /// 发布流地址解析失败事件
    pub fn publish_resolution_failed(&self, error: &str) {
        self.publish(PlayerEvent::ResolutionFailed {
            error: error.to_string(),
        });
    }

    /// 发布播放状态变更事件
    pub fn publish_playback_changed(&self, state: PlaybackState) {
        self.publish(PlayerEvent::PlaybackChanged {
            state,
            is_playing: state.is_playing(),
        });
    }

    /// 发布播放被拒绝事件
    pub fn publish_playback_failed(&self, error: &str) {
        self.publish(PlayerEvent::PlaybackFailed {
            error: error.to_string(),
        });
    }

    /// 发布音量变更事件
    pub fn publish_volume_changed(&self, volume: Volume) {
        self.publish(PlayerEvent::VolumeChanged {
            volume,
            muted: volume.is_muted(),
        });
    }

    fn publish(&self, event: PlayerEvent) {
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(error = %e, "Failed to publish player event (no receivers)");
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_subscriber_receives_event() {
        let publisher = EventPublisher::new();
        let mut first = publisher.subscribe();
        let mut second = publisher.subscribe();
        assert_eq!(publisher.observer_count(), 2);

        publisher.publish_volume_changed(Volume::MUTED);

        for rx in [&mut first, &mut second] {
            match rx.recv().await.unwrap() {
                PlayerEvent::VolumeChanged { volume, muted } => {
                    assert_eq!(volume, Volume::MUTED);
                    assert!(muted);
                }
                other => panic!("unexpected event: {:?}", other),
            }
        }
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let publisher = EventPublisher::new();
        publisher.publish_stream_resolved("https://x/stream");
        assert_eq!(publisher.observer_count(), 0);
    }

    #[test]
    fn test_event_json_shape() {
        let event = PlayerEvent::PlaybackChanged {
            state: PlaybackState::Playing,
            is_playing: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "PlaybackChanged");
        assert_eq!(json["data"]["state"], "playing");
        assert_eq!(json["data"]["is_playing"], true);
    }
}
