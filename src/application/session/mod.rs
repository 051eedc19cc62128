//! 应用层 - 音频会话
//!
//! 全局唯一的播放会话及其对外快照

mod audio_session;
mod snapshot;

pub use audio_session::AudioSession;
pub use snapshot::PlayerSnapshot;
