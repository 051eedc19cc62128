//! 播放器状态快照

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::playback::{PlaybackState, Volume};

/// 观察者可见的播放器状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub stream_url: Option<String>,
    pub state: PlaybackState,
    pub is_playing: bool,
    pub volume: Volume,
    pub muted: bool,
    pub updated_at: DateTime<Utc>,
}
