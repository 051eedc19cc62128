//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Playback Context: 全局音频会话的状态与值对象
//! - Pagination Context: 列表分页窗口计算

pub mod pagination;
pub mod playback;
