//! Fake Media Backend - 用于测试的媒体后端
//!
//! 不连接任何流，只记录命令；可配置为拒绝播放以模拟自动播放限制

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use crate::application::ports::{MediaBackendPort, MediaError};
use crate::domain::playback::Volume;

/// Fake Media Backend 配置
#[derive(Debug, Clone, Default)]
pub struct FakeMediaBackendConfig {
    /// 拒绝所有播放请求
    pub reject_play: bool,
    /// 模拟的启动延迟（毫秒）
    pub start_delay_ms: u64,
}

/// Fake Media Backend
pub struct FakeMediaBackend {
    config: FakeMediaBackendConfig,
    reject_play: AtomicBool,
    source: Mutex<Option<String>>,
    volume: AtomicU32,
    playing: AtomicBool,
    play_calls: AtomicUsize,
    pause_calls: AtomicUsize,
}

impl FakeMediaBackend {
    pub fn new(config: FakeMediaBackendConfig) -> Self {
        tracing::info!(
            reject_play = config.reject_play,
            start_delay_ms = config.start_delay_ms,
            "FakeMediaBackend initialized"
        );
        Self {
            reject_play: AtomicBool::new(config.reject_play),
            config,
            source: Mutex::new(None),
            volume: AtomicU32::new(Volume::FULL.value().to_bits()),
            playing: AtomicBool::new(false),
            play_calls: AtomicUsize::new(0),
            pause_calls: AtomicUsize::new(0),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeMediaBackendConfig::default())
    }

    /// 运行时切换拒绝播放
    pub fn set_reject_play(&self, reject: bool) {
        self.reject_play.store(reject, Ordering::SeqCst);
    }

    pub fn source(&self) -> Option<String> {
        self.source.lock().clone()
    }

    pub fn volume(&self) -> Volume {
        Volume::new(f32::from_bits(self.volume.load(Ordering::SeqCst)))
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn play_calls(&self) -> usize {
        self.play_calls.load(Ordering::SeqCst)
    }

    pub fn pause_calls(&self) -> usize {
        self.pause_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaBackendPort for FakeMediaBackend {
    fn set_source(&self, url: &str) {
        *self.source.lock() = Some(url.to_string());
    }

    async fn play(&self) -> Result<(), MediaError> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);

        if self.config.start_delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.start_delay_ms))
                .await;
        }

        if self.source.lock().is_none() {
            return Err(MediaError::NoSource);
        }
        if self.reject_play.load(Ordering::SeqCst) {
            return Err(MediaError::Rejected(
                "autoplay blocked by fake backend".to_string(),
            ));
        }

        self.playing.store(true, Ordering::SeqCst);
        tracing::debug!("FakeMediaBackend: playing");
        Ok(())
    }

    fn pause(&self) {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
        tracing::debug!("FakeMediaBackend: paused");
    }

    fn set_volume(&self, volume: Volume) {
        self.volume.store(volume.value().to_bits(), Ordering::SeqCst);
    }
}
