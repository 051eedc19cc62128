//! Sled 嵌入式键值存储

mod preference_store;

pub use preference_store::{SledPreferenceConfig, SledPreferenceStore};
