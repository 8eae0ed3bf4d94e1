use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::User,
    realtime::registry::ConnectionRegistry, state::AppState,
};

#[derive(Deserialize)]
pub struct ConnectParams {
    pub user_id: i32,
}

/// Opens the real-time channel for a user.
///
/// The channel is registered on handshake and receives emergency alerts for the user,
/// plus request status changes if the user is an admin. Authentication happens
/// upstream; the `user_id` query parameter is trusted.
///
/// # Returns
/// - `101 Switching Protocols` - Channel open
/// - `404 Not Found` - User does not exist
pub async fn connect(
    State(state): State<AppState>,
    Query(params): Query<ConnectParams>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::new(&state.db)
        .find_by_id(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;

    let registry = state.registry.clone();

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, registry, user)))
}

/// Forwards registry payloads to the socket until either side closes.
async fn handle_socket(socket: WebSocket, registry: ConnectionRegistry, user: User) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let connection_id = registry.register(user.id, user.admin, tx).await;
    tracing::info!("Real-time channel opened for {} (user {})", user.name, user.id);

    loop {
        tokio::select! {
            outgoing = rx.recv() => match outgoing {
                Some(text) => {
                    if let Err(e) = sink.send(Message::Text(text.into())).await {
                        tracing::warn!("Failed to push to user {}: {}", user.id, e);
                        break;
                    }
                }
                // Replaced by a newer connection for the same user
                None => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("Real-time channel error for user {}: {}", user.id, e);
                    break;
                }
            },
        }
    }

    registry.deregister(user.id, connection_id).await;
    tracing::info!("Real-time channel closed for user {}", user.id);
}
