//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::domain::{ConnectionId, GroupId, UserId};
use crate::infrastructure::dto::websocket::ClientEvent;
use crate::ui::state::AppState;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub user_id: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> UserId (Domain Model)
    let user_id = match UserId::new(query.user_id.clone()) {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!("Invalid user_id in connect query: '{}'", query.user_id);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let connection_id = ConnectionId::new();

    // Create a channel for this connection to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Register the connection. A duplicate user_id supersedes the previous
    // connection, so this never rejects.
    state
        .connect_usecase
        .execute(connection_id, user_id.clone(), tx)
        .await;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id, user_id, rx)))
}

/// Spawns a task that drains the rx channel into the WebSocket sender.
///
/// This is the outbound half: events broadcast by the use cases arrive on
/// the channel and are written to this client's socket. The write is the
/// only external I/O of the relay and lives in its own task so a slow
/// client never stalls event dispatch.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    connection_id: ConnectionId,
    user_id: UserId,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_client_event(&state_clone, &text).await;
                }
                Message::Ping(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    tracing::info!("Connection '{}' for user '{}' closed", connection_id, user_id);

    // Transport-level disconnect: idempotent and a no-op for superseded
    // connections.
    state.disconnect_usecase.execute(connection_id).await;
}

/// Parse one inbound frame and dispatch it to the matching use case.
///
/// A malformed frame (bad JSON, unknown type, missing field, empty id) is
/// dropped with a warning; the connection is never terminated over it.
async fn dispatch_client_event(state: &AppState, text: &str) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Dropping malformed inbound message: {}", e);
            return;
        }
    };

    match event {
        ClientEvent::JoinGroup {
            user_id,
            group_id,
            user_name: _,
        } => {
            let Some((user_id, group_id)) = validate_ids(user_id, group_id) else {
                return;
            };
            state.join_group_usecase.execute(user_id, group_id).await;
        }
        ClientEvent::LeaveGroup { user_id, group_id } => {
            let Some((user_id, group_id)) = validate_ids(user_id, group_id) else {
                return;
            };
            state.leave_group_usecase.execute(user_id, group_id).await;
        }
        ClientEvent::WakeUp {
            user_id,
            group_id,
            user_name,
            wake_up_time,
        } => {
            let Some((user_id, group_id)) = validate_ids(user_id, group_id) else {
                return;
            };
            state
                .wake_up_usecase
                .execute(user_id, group_id, user_name, wake_up_time)
                .await;
        }
        ClientEvent::UserStatus {
            user_id,
            group_id,
            status,
        } => {
            let Some((user_id, group_id)) = validate_ids(user_id, group_id) else {
                return;
            };
            state
                .status_update_usecase
                .execute(user_id, group_id, status)
                .await;
        }
        ClientEvent::Buzz {
            user_id,
            group_id,
            user_name,
            target_user_id,
        } => {
            let Some((user_id, group_id)) = validate_ids(user_id, group_id) else {
                return;
            };
            let Ok(target_user_id) = UserId::new(target_user_id) else {
                tracing::warn!("Dropping buzz with empty target user id");
                return;
            };
            state
                .buzz_usecase
                .execute(user_id, user_name, group_id, target_user_id)
                .await;
        }
    }
}

fn validate_ids(user_id: String, group_id: String) -> Option<(UserId, GroupId)> {
    let user_id = match UserId::new(user_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Dropping inbound message: {}", e);
            return None;
        }
    };
    let group_id = match GroupId::new(group_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Dropping inbound message: {}", e);
            return None;
        }
    };
    Some((user_id, group_id))
}
