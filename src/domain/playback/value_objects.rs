//! Playback Context - Value Objects

use serde::Serialize;

/// 音量持久化使用的固定键
pub const VOLUME_KEY: &str = "radioVolume";

/// 音量
///
/// 不变量:
/// - 值始终位于 [0.0, 1.0]
/// - NaN 视为静音
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Volume(f32);

impl Volume {
    pub const MUTED: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// 创建音量，超出范围的值会被钳制
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::MUTED;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_muted(self) -> bool {
        self.0 <= 0.0
    }

    /// 二值静音切换：有声 -> 0.0，静音 -> 1.0
    ///
    /// 不会恢复切换前的音量。
    pub fn toggled_mute(self) -> Self {
        if self.0 > 0.0 {
            Self::MUTED
        } else {
            Self::FULL
        }
    }

    /// 解析持久化的十进制字符串，无法解析或非有限数时返回 None
    pub fn parse_persisted(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self::new)
    }

    /// 持久化格式（十进制字符串）
    pub fn to_persisted(self) -> String {
        self.0.to_string()
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
