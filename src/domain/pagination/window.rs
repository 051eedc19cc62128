//! 页码窗口计算
//!
//! 纯函数，无副作用。页码从 1 开始。

use serde::{Serialize, Serializer};

use super::PaginationError;

/// 不使用省略号时最多展示的页数
pub const MAX_PAGES_TO_SHOW: u32 = 5;

/// 页码标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(u32),
    Ellipsis,
}

/// 页码序列化为数字，省略号序列化为 "..."
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u32(*page),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

fn pages(range: std::ops::RangeInclusive<u32>) -> impl Iterator<Item = PageMarker> {
    range.map(PageMarker::Page)
}

/// 计算要展示的页码按钮
///
/// - `total_pages <= 1`: 空序列（调用方不渲染分页）
/// - `total_pages <= 5`: 全部页码
/// - 否则当前页左右各一页，首尾页固定，中间用省略号连接:
///   `1 2 3 4 5 … 10`、`1 … 6 7 8 9 10`、`1 … 4 5 6 … 10`
pub fn compute_window(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages <= 1 {
        return Vec::new();
    }

    if total_pages <= MAX_PAGES_TO_SHOW {
        return pages(1..=total_pages).collect();
    }

    let left = current_page.saturating_sub(1).max(1);
    let right = current_page.saturating_add(1).min(total_pages);

    let show_left_dots = left > 2;
    let show_right_dots = right < total_pages - 1;

    let mut window = Vec::with_capacity(MAX_PAGES_TO_SHOW as usize + 2);

    match (show_left_dots, show_right_dots) {
        (false, true) => {
            window.extend(pages(1..=MAX_PAGES_TO_SHOW));
            window.push(PageMarker::Ellipsis);
            window.push(PageMarker::Page(total_pages));
        }
        (true, false) => {
            window.push(PageMarker::Page(1));
            window.push(PageMarker::Ellipsis);
            window.extend(pages(total_pages - (MAX_PAGES_TO_SHOW - 1)..=total_pages));
        }
        _ => {
            window.push(PageMarker::Page(1));
            if show_left_dots {
                window.push(PageMarker::Ellipsis);
            }
            window.extend(pages(left..=right));
            if show_right_dots {
                window.push(PageMarker::Ellipsis);
            }
            window.push(PageMarker::Page(total_pages));
        }
    }

    window
}

/// 带输入校验的入口，负数或超出 u32 的输入返回 `InvalidInput`
pub fn try_compute_window(
    current_page: i64,
    total_pages: i64,
) -> Result<Vec<PageMarker>, PaginationError> {
    let invalid = || PaginationError::InvalidInput {
        current_page,
        total_pages,
    };

    let current = u32::try_from(current_page).map_err(|_| invalid())?;
    let total = u32::try_from(total_pages).map_err(|_| invalid())?;

    Ok(compute_window(current, total))
}

/// 居中滑动窗口
///
/// 以当前页为中心展示 `max_to_show` 个连续页码，窗口碰到末尾时向前平移；
/// 窗口外的首页/尾页单独展示，相隔超过一页时插入省略号。
pub fn compute_sliding_window(current_page: u32, total_pages: u32, max_to_show: u32) -> Vec<PageMarker> {
    if total_pages <= 1 || max_to_show == 0 {
        return Vec::new();
    }

    let mut start = current_page.saturating_sub(max_to_show / 2).max(1);
    let mut end = start.saturating_add(max_to_show - 1);
    if end > total_pages {
        end = total_pages;
        start = (end + 1).saturating_sub(max_to_show).max(1);
    }

    let mut window = Vec::with_capacity(max_to_show as usize + 4);

    if start > 1 {
        window.push(PageMarker::Page(1));
    }
    if start > 2 {
        window.push(PageMarker::Ellipsis);
    }
    window.extend(pages(start..=end));
    if end < total_pages - 1 {
        window.push(PageMarker::Ellipsis);
    }
    if end < total_pages {
        window.push(PageMarker::Page(total_pages));
    }

    window
}
