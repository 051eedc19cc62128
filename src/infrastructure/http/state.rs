//! Application State
//!
//! 所有 HTTP Handler 共享的应用状态

use std::sync::Arc;

use crate::application::AudioSession;
use crate::domain::pagination::PaginationPolicy;
use crate::infrastructure::events::EventPublisher;

/// 应用状态
///
/// 持有进程内唯一的音频会话；Handler 只通过会话的命令修改播放状态
pub struct AppState {
    pub session: Arc<AudioSession>,
    pub event_publisher: Arc<EventPublisher>,
    pub pagination_policy: PaginationPolicy,
}

impl AppState {
    /// 创建应用状态
    pub fn new(session: Arc<AudioSession>, event_publisher: Arc<EventPublisher>) -> Self {
        Self {
            session,
            event_publisher,
            pagination_policy: PaginationPolicy::STANDARD,
        }
    }
}
