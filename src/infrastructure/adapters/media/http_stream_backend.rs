//! HTTP Stream Backend - 直播流媒体后端
//!
//! 实现 MediaBackendPort trait。播放即打开到流地址的长连接并持续拉取数据，
//! 暂停即断开连接。连接中断或流结束时通过事件通道上报。
//!
//! 后端不解码音频：音量只记录下来，由播放端按会话快照渲染。

use async_trait::async_trait;
use futures_util::StreamExt;
use parking_lot::Mutex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::ports::{MediaBackendPort, MediaError, MediaEvent};
use crate::domain::playback::Volume;

/// 直播流后端配置
#[derive(Debug, Clone)]
pub struct HttpStreamBackendConfig {
    /// 建立连接并收到响应头的超时时间（秒）
    pub connect_timeout_secs: u64,
}

impl Default for HttpStreamBackendConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
        }
    }
}

/// 直播流后端
pub struct HttpStreamBackend {
    client: Client,
    header_timeout: Duration,
    source: Mutex<Option<String>>,
    /// f32 音量的位表示
    volume: AtomicU32,
    playback: Mutex<Option<JoinHandle<()>>>,
    bytes_received: Arc<AtomicU64>,
    events: mpsc::Sender<MediaEvent>,
}

impl HttpStreamBackend {
    /// 创建后端，外部事件写入 `events`
    pub fn new(
        config: HttpStreamBackendConfig,
        events: mpsc::Sender<MediaEvent>,
    ) -> Result<Self, MediaError> {
        // 直播流没有总时长，只限制建连和等待响应头的时间
        let header_timeout = Duration::from_secs(config.connect_timeout_secs);
        let client = Client::builder()
            .connect_timeout(header_timeout)
            .build()
            .map_err(|e| MediaError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            header_timeout,
            source: Mutex::new(None),
            volume: AtomicU32::new(Volume::FULL.value().to_bits()),
            playback: Mutex::new(None),
            bytes_received: Arc::new(AtomicU64::new(0)),
            events,
        })
    }

    pub fn source(&self) -> Option<String> {
        self.source.lock().clone()
    }

    pub fn volume(&self) -> Volume {
        Volume::new(f32::from_bits(self.volume.load(Ordering::Relaxed)))
    }

    /// 累计接收的字节数
    pub fn bytes_received(&self) -> u64 {
        self.bytes_received.load(Ordering::Relaxed)
    }

    /// 是否有活动的拉流任务
    pub fn is_streaming(&self) -> bool {
        self.playback
            .lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn stop_stream(&self) -> bool {
        match self.playback.lock().take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

/// 可播放的 Content-Type；缺失时放行
fn is_playable_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("audio/")
        || mime == "application/ogg"
        || mime == "application/octet-stream"
        || mime == "video/mp2t"
}

#[async_trait]
impl MediaBackendPort for HttpStreamBackend {
    fn set_source(&self, url: &str) {
        let previous = self.source.lock().replace(url.to_string());
        if previous.as_deref() != Some(url) && self.stop_stream() {
            tracing::debug!("Source changed, previous stream stopped");
        }
        tracing::debug!(url = %url, "Media source set");
    }

    async fn play(&self) -> Result<(), MediaError> {
        let url = self.source().ok_or(MediaError::NoSource)?;

        if self.is_streaming() {
            return Ok(());
        }

        let response = tokio::time::timeout(self.header_timeout, self.client.get(&url).send())
            .await
            .map_err(|_| {
                MediaError::NetworkError(format!(
                    "Stream did not answer within {}s",
                    self.header_timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    MediaError::NetworkError(format!("Cannot connect to stream: {}", e))
                } else {
                    MediaError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Rejected(format!("Stream answered HTTP {}", status)));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !is_playable_content_type(content_type.as_deref()) {
            return Err(MediaError::Unsupported(content_type.unwrap_or_default()));
        }

        let mut stream = response.bytes_stream();
        let counter = self.bytes_received.clone();
        let events = self.events.clone();
        let stream_url = url.clone();

        let handle = tokio::spawn(async move {
            while let Some(chunk) = stream.next().await {
                match chunk {
                    Ok(bytes) => {
                        counter.fetch_add(bytes.len() as u64, Ordering::Relaxed);
                    }
                    Err(e) => {
                        tracing::warn!(url = %stream_url, error = %e, "Stream interrupted");
                        let _ = events.send(MediaEvent::Error(e.to_string())).await;
                        return;
                    }
                }
            }
            tracing::info!(url = %stream_url, "Stream ended");
            let _ = events.send(MediaEvent::Ended).await;
        });

        if let Some(previous) = self.playback.lock().replace(handle) {
            previous.abort();
        }

        tracing::info!(
            url = %url,
            content_type = ?content_type,
            volume = %self.volume(),
            "Stream connected"
        );
        Ok(())
    }

    fn pause(&self) {
        if self.stop_stream() {
            tracing::info!(bytes_received = self.bytes_received(), "Stream disconnected");
        }
    }

    fn set_volume(&self, volume: Volume) {
        self.volume.store(volume.value().to_bits(), Ordering::Relaxed);
    }
}

impl Drop for HttpStreamBackend {
    fn drop(&mut self) {
        self.stop_stream();
    }
}
