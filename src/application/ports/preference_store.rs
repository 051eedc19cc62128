//! Preference Store Port - 本地持久化键值存储
//!
//! 同步、幂等写入，后写覆盖先写

use thiserror::Error;

/// 偏好存储错误
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Stored value is not valid UTF-8: {0}")]
    EncodingError(String),
}

/// Preference Store Port
pub trait PreferenceStorePort: Send + Sync {
    /// 读取值，不存在时返回 None
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// 写入值
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
