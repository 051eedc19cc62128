//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod media_backend;
mod preference_store;
mod station_config;

pub use media_backend::{MediaBackendPort, MediaError, MediaEvent};
pub use preference_store::{PreferenceError, PreferenceStorePort};
pub use station_config::{StationConfigPort, StationError};
