//! WebSocket Handler
//!
//! 播放器观察者：连接后先推送一次完整快照，随后转发所有会话事件

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::infrastructure::events::PlayerEvent;
use crate::infrastructure::http::state::AppState;

/// GET /ws/player
pub async fn player_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_player_socket(socket, state))
}

fn encode(event: &PlayerEvent) -> Option<Message> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Message::Text(json)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize event");
            None
        }
    }
}

async fn handle_player_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // 先订阅再取快照，避免丢失两者之间的事件
    let mut event_rx = state.session.subscribe();
    let session = state.session.clone();
    let observer_id = Uuid::new_v4();

    tracing::info!(
        observer_id = %observer_id,
        observers = state.event_publisher.observer_count(),
        "Player WebSocket connected"
    );

    let mut forward_task = tokio::spawn(async move {
        let initial = PlayerEvent::Snapshot(session.snapshot());
        if let Some(msg) = encode(&initial) {
            if sender.send(msg).await.is_err() {
                return;
            }
        }

        loop {
            let event = match event_rx.recv().await {
                Ok(event) => event,
                // 落后太多时用一次快照追平
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        observer_id = %observer_id,
                        skipped,
                        "Player WebSocket lagged, resending snapshot"
                    );
                    PlayerEvent::Snapshot(session.snapshot())
                }
                Err(RecvError::Closed) => break,
            };

            let Some(msg) = encode(&event) else {
                continue;
            };

            if let Err(e) = sender.send(msg).await {
                tracing::debug!(observer_id = %observer_id, error = %e, "Failed to send WebSocket message");
                break;
            }
        }
    });

    let mut receive_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::info!(observer_id = %observer_id, "Player WebSocket closed by client");
                    break;
                }
                Err(e) => {
                    tracing::debug!(observer_id = %observer_id, error = %e, "Player WebSocket error");
                    break;
                }
                // Ping 由 axum 自动回复，其余消息忽略
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut forward_task => receive_task.abort(),
        _ = &mut receive_task => forward_task.abort(),
    }

    tracing::info!(observer_id = %observer_id, "Player WebSocket disconnected");
}
