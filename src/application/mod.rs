//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StationConfig、MediaBackend、PreferenceStore）
//! - session: 全局音频会话管理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod session;

pub use error::ApplicationError;

pub use ports::{
    // Media backend
    MediaBackendPort,
    MediaError,
    MediaEvent,
    // Preference store
    PreferenceError,
    PreferenceStorePort,
    // Station config
    StationConfigPort,
    StationError,
};

pub use session::{AudioSession, PlayerSnapshot};
