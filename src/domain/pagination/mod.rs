//! Pagination Context - 分页限界上下文
//!
//! 职责:
//! - 页码窗口计算（数字按钮 + 省略号）
//! - 列表视图的分页状态（跳页、每页条数切换、条目区间）
//! - 服务端分页策略（每页条数钳制）

mod errors;
mod pager;
mod policy;
mod window;

pub use errors::PaginationError;
pub use pager::{Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use policy::PaginationPolicy;
pub use window::{
    compute_sliding_window, compute_window, try_compute_window, PageMarker, MAX_PAGES_TO_SHOW,
};
