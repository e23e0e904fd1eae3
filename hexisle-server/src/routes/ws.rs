//! Live viewer channel
//!
//! Each connected viewer gets the full game state on connect, then one
//! snapshot per successful mutation. A viewer whose socket write fails is
//! simply dropped; action processing never waits on viewers.

use crate::state::ServerState;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

pub async fn ws_handler(
    State(state): State<Arc<ServerState>>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| viewer_session(socket, state))
}

async fn viewer_session(mut socket: WebSocket, state: Arc<ServerState>) {
    // Subscribe before taking the snapshot so no mutation lands in between
    let mut updates = state.subscribe();
    let snapshot = state.with_game(|game| serde_json::to_string(game));
    let snapshot = match snapshot {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(?err, "failed to encode initial snapshot");
            return;
        }
    };
    if socket.send(Message::Text(snapshot)).await.is_err() {
        return;
    }
    tracing::debug!("viewer connected");

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(json) => {
                    if socket.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "viewer lagging, skipping snapshots");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                // Viewers are read-only; ignore whatever they send
                Some(Ok(_)) => {}
                _ => break,
            },
        }
    }
    tracing::debug!("viewer disconnected");
}
