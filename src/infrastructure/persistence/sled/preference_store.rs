//! Sled-based Preference Store Implementation
//!
//! 值以 UTF-8 字符串保存（如 `radioVolume` -> `"0.5"`），每次写入后立即 flush

use sled::Db;
use std::sync::Arc;

use crate::application::ports::{PreferenceError, PreferenceStorePort};

/// Sled 偏好存储配置
#[derive(Debug, Clone)]
pub struct SledPreferenceConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledPreferenceConfig {
    fn default() -> Self {
        Self {
            db_path: "data/prefs.sled".to_string(),
        }
    }
}

/// Sled 偏好存储
pub struct SledPreferenceStore {
    db: Db,
}

impl SledPreferenceStore {
    /// 打开（或创建）存储
    pub fn new(config: &SledPreferenceConfig) -> Result<Self, PreferenceError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| PreferenceError::StorageError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = db.len(),
            "SledPreferenceStore initialized"
        );

        Ok(Self { db })
    }

    /// 临时存储（进程退出即删除）
    pub fn temporary() -> Result<Self, PreferenceError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| PreferenceError::StorageError(e.to_string()))?;
        Ok(Self { db })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl PreferenceStorePort for SledPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let value = self
            .db
            .get(key)
            .map_err(|e| PreferenceError::StorageError(e.to_string()))?;

        value
            .map(|bytes| {
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| PreferenceError::EncodingError(e.to_string()))
            })
            .transpose()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.db
            .insert(key, value.as_bytes())
            .map_err(|e| PreferenceError::StorageError(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| PreferenceError::StorageError(e.to_string()))?;

        tracing::debug!(key = %key, value = %value, "Preference stored");
        Ok(())
    }
}
