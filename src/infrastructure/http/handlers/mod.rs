//! HTTP Handlers

mod pagination;
mod ping;
mod player;
mod station;
mod websocket;

pub use pagination::*;
pub use ping::*;
pub use player::*;
pub use station::*;
pub use websocket::*;
