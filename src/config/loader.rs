//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 合法的日志级别
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `RADIODECK_SERVER__PORT=9000`
/// - `RADIODECK_STATION__BASE_URL=http://backend:8000`
/// - `RADIODECK_PLAYER__BACKEND=fake`
/// - `RADIODECK_STORAGE__PREFS_PATH=/data/prefs.sled`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索工作目录下的 config.toml / config.local.toml
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("station.base_url", "http://localhost:8000")?
        .set_default("station.path", "/api/radio/station/")?
        .set_default("station.timeout_secs", 10)?
        .set_default("player.backend", "stream")?
        .set_default("player.connect_timeout_secs", 10)?
        .set_default("storage.prefs_path", "data/prefs.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 层级分隔符为双下划线，如 RADIODECK_STATION__TIMEOUT_SECS=5
    builder = builder.add_source(
        Environment::with_prefix("RADIODECK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.station.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Station base URL cannot be empty".to_string(),
        ));
    }

    if config.station.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Station timeout cannot be 0".to_string(),
        ));
    }

    if config.storage.prefs_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Preference store path cannot be empty".to_string(),
        ));
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Station: {}{}", config.station.base_url, config.station.path);
    tracing::info!("Station Timeout: {}s", config.station.timeout_secs);
    tracing::info!("Media Backend: {:?}", config.player.backend);
    tracing::info!("Preferences: {}", config.storage.prefs_path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaBackendKind;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_station_url() {
        let mut config = AppConfig::default();
        config.station.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!("radiodeck-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[station]\nbase_url = \"http://radio.test\"\ntimeout_secs = 3\n\n[player]\nbackend = \"fake\""
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.station.base_url, "http://radio.test");
        assert_eq!(config.station.timeout_secs, 3);
        assert_eq!(config.station.path, "/api/radio/station/");
        assert_eq!(config.player.backend, MediaBackendKind::Fake);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("radiodeck-does-not-exist.toml");
        assert!(load_config_from_path(Some(&path)).is_err());
    }
}
