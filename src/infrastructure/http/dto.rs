//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::pagination::PageMarker;
use crate::domain::playback::Volume;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Player DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SetVolumeRequest {
    pub volume: f32,
}

#[derive(Debug, Serialize)]
pub struct VolumeResponse {
    pub volume: Volume,
    pub muted: bool,
}

impl From<Volume> for VolumeResponse {
    fn from(volume: Volume) -> Self {
        Self {
            volume,
            muted: volume.is_muted(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RetryResponse {
    pub resolved: bool,
    pub stream_url: Option<String>,
}

// ============================================================================
// Pagination DTOs
// ============================================================================

/// 窗口样式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStyle {
    /// 当前页左右各一页
    #[default]
    Classic,
    /// 居中滑动窗口
    Sliding,
}

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_current_page")]
    pub current_page: i64,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub total_items: Option<i64>,
    #[serde(default)]
    pub page_size: Option<u32>,
    /// 请求跳转的目标页
    #[serde(default)]
    pub target_page: Option<i64>,
    /// 切换后的每页条数，切换后回到第 1 页
    #[serde(default)]
    pub new_page_size: Option<u32>,
    #[serde(default)]
    pub style: WindowStyle,
}

fn default_current_page() -> i64 {
    1
}

#[derive(Debug, Serialize)]
pub struct ItemRangeDto {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct PaginationResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub visible: bool,
    pub markers: Vec<PageMarker>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    /// 本次请求是否换页（为 false 时不应触发换页回调）
    pub page_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_range: Option<ItemRangeDto>,
    pub page_size_options: &'static [u32],
}
