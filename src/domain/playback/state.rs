//! Playback Context - 播放状态机

use serde::Serialize;

/// 播放状态
///
/// 状态转换:
/// - Unresolved -> Paused: 电台配置解析成功
/// - Paused -> Starting: 请求播放，等待媒体后端确认
/// - Starting -> Playing: 媒体后端确认开始播放
/// - Starting -> Paused: 媒体后端拒绝播放
/// - Playing -> Paused: 用户暂停，或外部暂停/结束/错误事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// 尚未解析到流地址
    Unresolved,
    /// 已有流地址，未播放
    Paused,
    /// 已请求播放，结果未知
    Starting,
    /// 媒体正在播放
    Playing,
}

impl PlaybackState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Paused => "paused",
            Self::Starting => "starting",
            Self::Playing => "playing",
        }
    }

    /// 只有媒体真正在播放时才为 true
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// 播放或启动中（外部暂停事件需要处理的状态）
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Starting | Self::Playing)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Unresolved
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_playing_reports_playing() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Starting.is_playing());
        assert!(!PlaybackState::Paused.is_playing());
        assert!(!PlaybackState::Unresolved.is_playing());
    }

    #[test]
    fn test_initial_state_is_unresolved() {
        assert_eq!(PlaybackState::default(), PlaybackState::Unresolved);
        assert!(!PlaybackState::default().is_active());
    }
}
