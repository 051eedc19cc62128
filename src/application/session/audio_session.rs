//! Audio Session - 全局音频会话管理器
//!
//! 应用生命周期内唯一的播放会话：
//! - 启动时向电台配置接口解析一次流地址（不自动重试）
//! - 播放/暂停切换，播放结果由媒体后端确认后才进入 Playing
//! - 音量设置/静音切换，音量同步持久化
//! - 每次状态变更都广播给所有观察者

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use crate::application::ports::{
    MediaBackendPort, MediaEvent, PreferenceStorePort, StationConfigPort, StationError,
};
use crate::domain::playback::{PlaybackState, StationInfo, Volume, VOLUME_KEY};
use crate::infrastructure::events::{EventPublisher, PlayerEvent};

use super::PlayerSnapshot;

/// 会话内部状态
#[derive(Debug)]
struct SessionState {
    stream_url: Option<String>,
    playback: PlaybackState,
    volume: Volume,
    station: Option<StationInfo>,
    /// 自动解析已执行过
    resolution_attempted: bool,
    /// 解析请求进行中
    resolving: bool,
    updated_at: DateTime<Utc>,
}

impl SessionState {
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            stream_url: self.stream_url.clone(),
            state: self.playback,
            is_playing: self.playback.is_playing(),
            volume: self.volume,
            muted: self.volume.is_muted(),
            updated_at: self.updated_at,
        }
    }
}

/// 解析入口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Initial,
    Retry,
}

/// 全局音频会话
///
/// 唯一的播放状态写入方。锁不会跨越 `.await` 持有。
pub struct AudioSession {
    station: Arc<dyn StationConfigPort>,
    media: Arc<dyn MediaBackendPort>,
    preferences: Arc<dyn PreferenceStorePort>,
    publisher: Arc<EventPublisher>,
    state: Mutex<SessionState>,
}

impl AudioSession {
    /// 创建会话，并恢复持久化的音量
    pub fn new(
        station: Arc<dyn StationConfigPort>,
        media: Arc<dyn MediaBackendPort>,
        preferences: Arc<dyn PreferenceStorePort>,
        publisher: Arc<EventPublisher>,
    ) -> Self {
        let volume = load_volume(preferences.as_ref(), VOLUME_KEY);

        tracing::info!(
            volume = %volume,
            volume_key = VOLUME_KEY,
            "Audio session created"
        );

        Self {
            station,
            media,
            preferences,
            publisher,
            state: Mutex::new(SessionState {
                stream_url: None,
                playback: PlaybackState::Unresolved,
                volume,
                station: None,
                resolution_attempted: false,
                resolving: false,
                updated_at: Utc::now(),
            }),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.state.lock().snapshot()
    }

    pub fn stream_url(&self) -> Option<String> {
        self.state.lock().stream_url.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.lock().playback.is_playing()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.state.lock().playback
    }

    pub fn volume(&self) -> Volume {
        self.state.lock().volume
    }

    /// 最近一次获取到的电台信息
    pub fn station_info(&self) -> Option<StationInfo> {
        self.state.lock().station.clone()
    }

    /// 订阅播放器事件
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.publisher.subscribe()
    }

    /// 启动时解析流地址
    ///
    /// 只执行一次；已解析时直接返回现有地址，失败后需通过
    /// [`retry_resolution`](Self::retry_resolution) 手动重试。
    pub async fn resolve_stream(&self) -> Option<String> {
        self.resolve(Resolution::Initial).await
    }

    /// 手动重试解析，仅在仍未解析时生效
    pub async fn retry_resolution(&self) -> Option<String> {
        self.resolve(Resolution::Retry).await
    }

    async fn resolve(&self, mode: Resolution) -> Option<String> {
        {
            let mut state = self.state.lock();
            if let Some(url) = &state.stream_url {
                return Some(url.clone());
            }
            if state.resolving {
                tracing::debug!("Stream resolution already in flight");
                return None;
            }
            if mode == Resolution::Initial && state.resolution_attempted {
                tracing::debug!("Stream resolution already attempted, use retry");
                return None;
            }
            state.resolving = true;
            state.resolution_attempted = true;
        }

        let result = self.station.fetch_descriptor().await;

        let descriptor = match result {
            Ok(descriptor) => descriptor,
            Err(e) => {
                self.state.lock().resolving = false;
                tracing::error!(error = %e, "Failed to load station configuration");
                self.publisher.publish_resolution_failed(&e.to_string());
                return None;
            }
        };

        let station = descriptor.info();
        let url = match descriptor.resolved_stream_url() {
            Some(url) => url,
            None => {
                {
                    let mut state = self.state.lock();
                    state.resolving = false;
                    state.station = Some(station);
                }
                let e = StationError::MissingStreamUrl;
                tracing::warn!(error = %e, "Station configuration unusable");
                self.publisher.publish_resolution_failed(&e.to_string());
                return None;
            }
        };

        // 先设置媒体源，再对观察者开放播放
        let volume = self.volume();
        self.media.set_source(&url);
        self.media.set_volume(volume);

        {
            let mut state = self.state.lock();
            state.resolving = false;
            state.stream_url = Some(url.clone());
            state.playback = PlaybackState::Paused;
            state.station = Some(station);
            state.touch();
        }

        tracing::info!(stream_url = %url, volume = %volume, "Stream resolved");
        self.publisher.publish_stream_resolved(&url);
        self.publisher.publish_playback_changed(PlaybackState::Paused);

        Some(url)
    }

    /// 播放/暂停切换
    ///
    /// - 未解析: 无操作，不调用媒体后端
    /// - 播放中: 暂停
    /// - 已暂停: 进入 Starting，等待媒体后端确认；被拒绝时回到 Paused
    /// - 启动中: 取消等待中的启动，回到 Paused
    pub async fn toggle_play(&self) -> PlayerSnapshot {
        let previous = {
            let mut state = self.state.lock();
            let previous = state.playback;
            match previous {
                PlaybackState::Unresolved => {
                    tracing::debug!("Toggle ignored: stream not resolved");
                    return state.snapshot();
                }
                PlaybackState::Playing | PlaybackState::Starting => {
                    state.playback = PlaybackState::Paused
                }
                PlaybackState::Paused => state.playback = PlaybackState::Starting,
            }
            state.touch();
            previous
        };

        if previous != PlaybackState::Paused {
            self.media.pause();
            if previous == PlaybackState::Starting {
                tracing::info!("Pending playback start cancelled");
            } else {
                tracing::info!("Playback paused");
            }
            self.publisher.publish_playback_changed(PlaybackState::Paused);
            return self.snapshot();
        }

        self.publisher.publish_playback_changed(PlaybackState::Starting);

        let result = self.media.play().await;

        let (settled, current) = {
            let mut state = self.state.lock();
            if state.playback != PlaybackState::Starting {
                // 等待期间已被取消或被媒体事件改写
                (None, state.playback)
            } else {
                state.playback = match &result {
                    Ok(()) => PlaybackState::Playing,
                    Err(_) => PlaybackState::Paused,
                };
                state.touch();
                (Some(state.playback), state.playback)
            }
        };

        match (&result, settled) {
            (Err(e), Some(_)) => {
                tracing::warn!(error = %e, "Playback start rejected");
                self.publisher.publish_playback_failed(&e.to_string());
            }
            (Err(e), None) => {
                tracing::debug!(error = %e, "Superseded playback start failed");
            }
            (Ok(()), Some(_)) => tracing::info!("Playback started"),
            (Ok(()), None) if current != PlaybackState::Playing => {
                // 迟到的启动结果，媒体不应继续输出
                self.media.pause();
                tracing::info!(state = %current, "Late playback start stopped");
            }
            (Ok(()), None) => {}
        }

        if let Some(playback) = settled {
            self.publisher.publish_playback_changed(playback);
        }

        self.snapshot()
    }

    /// 设置音量（钳制到 [0, 1]），立即应用并持久化
    pub fn set_volume(&self, value: f32) -> Volume {
        let volume = Volume::new(value);
        {
            let mut state = self.state.lock();
            state.volume = volume;
            state.touch();
        }
        self.apply_volume(volume);
        volume
    }

    /// 静音切换：有声 -> 0.0，静音 -> 1.0
    pub fn toggle_mute(&self) -> Volume {
        let volume = {
            let mut state = self.state.lock();
            state.volume = state.volume.toggled_mute();
            state.touch();
            state.volume
        };
        self.apply_volume(volume);
        volume
    }

    fn apply_volume(&self, volume: Volume) {
        self.media.set_volume(volume);

        if let Err(e) = self
            .preferences
            .set(VOLUME_KEY, &volume.to_persisted())
        {
            tracing::warn!(error = %e, volume = %volume, "Failed to persist volume");
        }

        tracing::debug!(volume = %volume, "Volume changed");
        self.publisher.publish_volume_changed(volume);
    }

    /// 处理媒体后端上报的外部事件
    pub fn handle_media_event(&self, event: MediaEvent) {
        let changed = {
            let mut state = self.state.lock();
            let next = match (&event, state.playback) {
                (MediaEvent::Paused | MediaEvent::Ended | MediaEvent::Error(_), current)
                    if current.is_active() =>
                {
                    Some(PlaybackState::Paused)
                }
                (MediaEvent::Playing, PlaybackState::Paused | PlaybackState::Starting) => {
                    Some(PlaybackState::Playing)
                }
                _ => None,
            };

            if let Some(next) = next {
                state.playback = next;
                state.touch();
            }
            next
        };

        match &event {
            MediaEvent::Error(message) => {
                tracing::warn!(error = %message, "Media error reported");
            }
            other => tracing::debug!(event = ?other, "Media event received"),
        }

        if let Some(playback) = changed {
            self.publisher.publish_playback_changed(playback);
        }
    }

    /// 消费媒体后端事件，直到发送端全部关闭
    pub async fn run_media_events(self: Arc<Self>, mut events: mpsc::Receiver<MediaEvent>) {
        tracing::info!("Media event loop started");
        while let Some(event) = events.recv().await {
            self.handle_media_event(event);
        }
        tracing::info!("Media event loop stopped");
    }
}

/// 读取持久化音量，缺失或无效时使用默认值 1.0
fn load_volume(preferences: &dyn PreferenceStorePort, key: &str) -> Volume {
    match preferences.get(key) {
        Ok(Some(raw)) => Volume::parse_persisted(&raw).unwrap_or_else(|| {
            tracing::warn!(key = %key, value = %raw, "Ignoring invalid persisted volume");
            Volume::default()
        }),
        Ok(None) => Volume::default(),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read persisted volume");
            Volume::default()
        }
    }
}
