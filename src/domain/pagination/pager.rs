//! 列表视图分页状态

use serde::Serialize;

use super::window::{compute_sliding_window, compute_window, PageMarker, MAX_PAGES_TO_SHOW};

/// 每页条数选项
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 分页状态
///
/// 页码从 1 开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: None,
        }
    }

    /// 按条目总数推导总页数
    pub fn from_items(current_page: u32, total_items: u64, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page,
            total_pages: total_pages_for(total_items, page_size),
            page_size,
            total_items: Some(total_items),
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_total_items(mut self, total_items: u64) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// 只有多于一页时才渲染分页控件
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn window(&self) -> Vec<PageMarker> {
        compute_window(self.current_page, self.total_pages)
    }

    pub fn sliding_window(&self) -> Vec<PageMarker> {
        compute_sliding_window(self.current_page, self.total_pages, MAX_PAGES_TO_SHOW)
    }

    /// 当前页展示的条目区间 (first, last)，1 开始
    ///
    /// 条目总数未知或为 0 时返回 None。
    pub fn item_range(&self) -> Option<(u64, u64)> {
        let total = self.total_items.filter(|n| *n > 0)?;
        let page = u64::from(self.current_page.max(1));
        let size = u64::from(self.page_size);

        let first = ((page - 1) * size + 1).min(total);
        let last = (page * size).min(total);
        Some((first, last))
    }

    /// “首页 / 上一页”是否可用
    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// “下一页 / 末页”是否可用
    pub fn can_go_forward(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 跳转目标页
    ///
    /// 越界或与当前页相同时返回 None，此时不应触发换页回调。
    pub fn go_to(&self, target: u32) -> Option<u32> {
        if target < 1 || target > self.total_pages || target == self.current_page {
            return None;
        }
        Some(target)
    }

    pub fn previous(&self) -> Option<u32> {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn next(&self) -> Option<u32> {
        self.go_to(self.current_page.saturating_add(1))
    }

    /// 切换每页条数，回到第一页
    pub fn change_page_size(&self, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let total_pages = match self.total_items {
            Some(total) => total_pages_for(total, page_size),
            None => self.total_pages,
        };

        Self {
            current_page: 1,
            total_pages,
            page_size,
            total_items: self.total_items,
        }
    }
}

fn total_pages_for(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
