//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 电台配置接口
    #[serde(default)]
    pub station: StationConfig,

    /// 播放器配置
    #[serde(default)]
    pub player: PlayerConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 电台配置接口
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// 后端 Base URL
    #[serde(default = "default_station_base_url")]
    pub base_url: String,

    /// 电台配置路径
    #[serde(default = "default_station_path")]
    pub path: String,

    /// 请求超时（秒）
    #[serde(default = "default_station_timeout")]
    pub timeout_secs: u64,
}

fn default_station_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_station_path() -> String {
    "/api/radio/station/".to_string()
}

fn default_station_timeout() -> u64 {
    10
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            base_url: default_station_base_url(),
            path: default_station_path(),
            timeout_secs: default_station_timeout(),
        }
    }
}

/// 媒体后端类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaBackendKind {
    /// 连接真实的 HTTP 音频流
    #[default]
    Stream,
    /// 只记录命令，不连接网络
    Fake,
}

/// 播放器配置
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub backend: MediaBackendKind,

    /// 流连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            backend: MediaBackendKind::default(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 偏好设置数据库路径（sled）
    #[serde(default = "default_prefs_path")]
    pub prefs_path: String,
}

fn default_prefs_path() -> String {
    "data/prefs.sled".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefs_path: default_prefs_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别（trace / debug / info / warn / error）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否输出 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
