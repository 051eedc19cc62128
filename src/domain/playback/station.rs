//! Playback Context - 电台描述
//!
//! 电台配置接口返回的 JSON 至少包含 `stream_url`，其形态为:
//! - 字符串: `{"stream_url": "https://..."}`
//! - 对象: `{"stream_url": {"src": "https://..."}}`
//!
//! 其余字段按宽松方式读取，类型不符时视为缺失。

use serde::Serialize;
use serde_json::Value;

/// 从 `stream_url` 字段解析出可播放地址
///
/// 两种形态都不匹配、或地址为空字符串时返回 None。
pub fn resolve_stream_url(field: Option<&Value>) -> Option<String> {
    let url = match field? {
        Value::String(url) => url.as_str(),
        Value::Object(map) => map.get("src").and_then(Value::as_str)?,
        _ => return None,
    };

    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// 电台描述（配置接口的原始响应）
#[derive(Debug, Clone, Default)]
pub struct StationDescriptor {
    pub stream_url: Option<Value>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub live_stream_url: Option<String>,
    pub listeners_count: Option<i64>,
    pub on_air: Option<bool>,
}

impl StationDescriptor {
    /// 宽松解析：非对象 JSON 得到空描述
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            stream_url: value.get("stream_url").cloned(),
            name: text("nombre").or_else(|| text("name")),
            description: text("descripcion").or_else(|| text("description")),
            live_stream_url: text("live_stream_url"),
            listeners_count: value.get("listeners_count").and_then(Value::as_i64),
            on_air: value
                .get("activo")
                .or_else(|| value.get("on_air"))
                .and_then(Value::as_bool),
        }
    }

    /// 解析出的播放地址
    pub fn resolved_stream_url(&self) -> Option<String> {
        resolve_stream_url(self.stream_url.as_ref())
    }

    /// 对外展示的电台信息
    pub fn info(&self) -> StationInfo {
        StationInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            stream_url: self.resolved_stream_url(),
            live_stream_url: self.live_stream_url.clone(),
            listeners_count: self.listeners_count,
            on_air: self.on_air,
        }
    }
}

/// 电台信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stream_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_stream_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_air: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_plain_string() {
        let body = json!({ "stream_url": "https://x/stream" });
        assert_eq!(
            resolve_stream_url(body.get("stream_url")),
            Some("https://x/stream".to_string())
        );
    }

    #[test]
    fn test_resolve_object_with_src() {
        let body = json!({ "stream_url": { "src": "https://y/stream" } });
        assert_eq!(
            resolve_stream_url(body.get("stream_url")),
            Some("https://y/stream".to_string())
        );
    }

    #[test]
    fn test_resolve_rejects_other_shapes() {
        assert_eq!(resolve_stream_url(None), None);
        assert_eq!(resolve_stream_url(Some(&Value::Null)), None);
        assert_eq!(resolve_stream_url(Some(&json!(42))), None);
        assert_eq!(resolve_stream_url(Some(&json!({ "href": "https://z" }))), None);
        assert_eq!(resolve_stream_url(Some(&json!({ "src": 7 }))), None);
        assert_eq!(resolve_stream_url(Some(&json!(""))), None);
    }

    #[test]
    fn test_descriptor_reads_station_fields() {
        let body = json!({
            "id": 1,
            "nombre": "Radio Oriente FM",
            "descripcion": "Música y noticias",
            "stream_url": "https://sonic.example/8126/stream",
            "live_stream_url": null,
            "listeners_count": 12,
            "activo": true
        });

        let descriptor = StationDescriptor::from_json(&body);
        let info = descriptor.info();
        assert_eq!(info.name.as_deref(), Some("Radio Oriente FM"));
        assert_eq!(
            info.stream_url.as_deref(),
            Some("https://sonic.example/8126/stream")
        );
        assert_eq!(info.live_stream_url, None);
        assert_eq!(info.listeners_count, Some(12));
        assert_eq!(info.on_air, Some(true));
    }

    #[test]
    fn test_descriptor_from_non_object() {
        let descriptor = StationDescriptor::from_json(&json!(["not", "an", "object"]));
        assert!(descriptor.resolved_stream_url().is_none());
        assert!(descriptor.name.is_none());
    }
}
