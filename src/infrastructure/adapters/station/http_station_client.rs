//! HTTP Station Client - 调用电台配置接口
//!
//! 实现 StationConfigPort trait
//!
//! 外部接口:
//! GET http://localhost:8000/api/radio/station/
//! Response: {"stream_url": "https://..." | {"src": "https://..."}, "nombre": "...", ...}

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{StationConfigPort, StationError};
use crate::domain::playback::StationDescriptor;

/// HTTP 电台配置客户端配置
#[derive(Debug, Clone)]
pub struct HttpStationClientConfig {
    /// 后端基础 URL
    pub base_url: String,
    /// 电台描述路径
    pub path: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpStationClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            path: "/api/radio/station/".to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpStationClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 电台配置客户端
pub struct HttpStationClient {
    client: Client,
    config: HttpStationClientConfig,
}

impl HttpStationClient {
    /// 创建新的客户端
    pub fn new(config: HttpStationClientConfig) -> Result<Self, StationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, StationError> {
        Self::new(HttpStationClientConfig::default())
    }

    /// 电台描述 URL
    pub fn station_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = self.config.path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[async_trait]
impl StationConfigPort for HttpStationClient {
    async fn fetch_descriptor(&self) -> Result<StationDescriptor, StationError> {
        let url = self.station_url();
        tracing::debug!(url = %url, "Fetching station descriptor");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                StationError::Timeout
            } else if e.is_connect() {
                StationError::NetworkError(format!("Cannot connect to station API: {}", e))
            } else {
                StationError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StationError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| StationError::InvalidResponse(format!("Failed to parse JSON: {}", e)))?;

        let descriptor = StationDescriptor::from_json(&body);

        tracing::info!(
            url = %url,
            station = ?descriptor.name,
            has_stream_url = descriptor.resolved_stream_url().is_some(),
            "Station descriptor loaded"
        );

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn station_app(body: Value) -> Router {
        Router::new().route(
            "/api/radio/station/",
            get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        )
    }

    #[test]
    fn test_config_default() {
        let config = HttpStationClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.path, "/api/radio/station/");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_station_url_joins_slashes() {
        let client =
            HttpStationClient::new(HttpStationClientConfig::new("http://api.example/")).unwrap();
        assert_eq!(client.station_url(), "http://api.example/api/radio/station/");

        let client = HttpStationClient::new(
            HttpStationClientConfig::new("http://api.example")
                .with_path("radio/station")
                .with_timeout(3),
        )
        .unwrap();
        assert_eq!(client.station_url(), "http://api.example/radio/station");
    }

    #[tokio::test]
    async fn test_fetch_plain_stream_url() {
        let base = serve(station_app(json!({
            "nombre": "Radio Oriente FM",
            "stream_url": "https://x/stream"
        })))
        .await;
        let client = HttpStationClient::new(HttpStationClientConfig::new(base)).unwrap();

        let descriptor = client.fetch_descriptor().await.unwrap();

        assert_eq!(descriptor.resolved_stream_url().as_deref(), Some("https://x/stream"));
        assert_eq!(descriptor.name.as_deref(), Some("Radio Oriente FM"));
    }

    #[tokio::test]
    async fn test_fetch_object_stream_url() {
        let base = serve(station_app(json!({ "stream_url": { "src": "https://y/stream" } }))).await;
        let client = HttpStationClient::new(HttpStationClientConfig::new(base)).unwrap();

        let descriptor = client.fetch_descriptor().await.unwrap();

        assert_eq!(descriptor.resolved_stream_url().as_deref(), Some("https://y/stream"));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let app = Router::new().route(
            "/api/radio/station/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(app).await;
        let client = HttpStationClient::new(HttpStationClientConfig::new(base)).unwrap();

        let err = client.fetch_descriptor().await.unwrap_err();
        assert!(matches!(err, StationError::ServiceError(_)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let app = Router::new().route("/api/radio/station/", get(|| async { "<html>" }));
        let base = serve(app).await;
        let client = HttpStationClient::new(HttpStationClientConfig::new(base)).unwrap();

        let err = client.fetch_descriptor().await.unwrap_err();
        assert!(matches!(err, StationError::InvalidResponse(_)));
    }
}
