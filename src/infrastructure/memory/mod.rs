//! Memory Layer - In-Memory State Management
//!
//! 不落盘的偏好存储，用于测试或禁用持久化时

mod preference_store;

pub use preference_store::InMemoryPreferenceStore;
