//! 电台配置适配器

mod http_station_client;

pub use http_station_client::{HttpStationClient, HttpStationClientConfig};
