use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use serde_json::Value;
use tokio::sync::{mpsc, RwLock};

/// Identifies a single registered connection for a user.
pub type ConnectionId = u64;

/// Outbound half of a user's open channel. Each item is one serialized JSON payload.
pub type PushSender = mpsc::UnboundedSender<String>;

struct PushChannel {
    connection_id: ConnectionId,
    admin: bool,
    sender: PushSender,
}

/// Map of user ID to that user's open real-time channel.
///
/// Clones share the same map. A user has at most one registered channel; registering
/// again replaces the previous one.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    channels: Arc<RwLock<HashMap<i32, PushChannel>>>,
    next_connection_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sender` as the open channel for `user_id`
    ///
    /// # Arguments
    /// - `user_id`: User the channel belongs to
    /// - `admin`: Whether the channel receives admin broadcasts
    /// - `sender`: Outbound half of the channel
    ///
    /// # Returns
    /// - `ConnectionId`: Identifier to pass to `deregister` when the socket closes
    pub async fn register(&self, user_id: i32, admin: bool, sender: PushSender) -> ConnectionId {
        let connection_id = self.next_connection_id.fetch_add(1, Ordering::Relaxed);

        let previous = self.channels.write().await.insert(
            user_id,
            PushChannel {
                connection_id,
                admin,
                sender,
            },
        );
        if previous.is_some() {
            tracing::debug!("Replaced existing channel for user {}", user_id);
        }

        connection_id
    }

    /// Removes the channel for `user_id` if it is still `connection_id`
    ///
    /// A newer connection registered by the same user is left in place.
    ///
    /// # Returns
    /// - `true`: The channel was removed
    /// - `false`: No matching channel was registered
    pub async fn deregister(&self, user_id: i32, connection_id: ConnectionId) -> bool {
        let mut channels = self.channels.write().await;
        match channels.get(&user_id) {
            Some(channel) if channel.connection_id == connection_id => {
                channels.remove(&user_id);
                true
            }
            _ => false,
        }
    }

    /// Sends `payload` to `user_id` if the user has an open channel
    ///
    /// Channels whose receiving side has gone away are removed.
    ///
    /// # Returns
    /// - `true`: Payload was queued on the user's channel
    /// - `false`: User has no open channel
    pub async fn send_if_open(&self, user_id: i32, payload: &Value) -> bool {
        let text = payload.to_string();

        let stale = {
            let channels = self.channels.read().await;
            match channels.get(&user_id) {
                Some(channel) => match channel.sender.send(text) {
                    Ok(()) => return true,
                    Err(_) => channel.connection_id,
                },
                None => return false,
            }
        };

        self.deregister(user_id, stale).await;
        false
    }

    /// Sends `payload` to every open admin channel
    ///
    /// # Returns
    /// - `usize`: Number of admin channels the payload was queued on
    pub async fn broadcast_to_admins(&self, payload: &Value) -> usize {
        let text = payload.to_string();

        let mut delivered = 0;
        let mut stale = Vec::new();
        {
            let channels = self.channels.read().await;
            for (user_id, channel) in channels.iter().filter(|(_, channel)| channel.admin) {
                match channel.sender.send(text.clone()) {
                    Ok(()) => delivered += 1,
                    Err(_) => stale.push((*user_id, channel.connection_id)),
                }
            }
        }

        for (user_id, connection_id) in stale {
            self.deregister(user_id, connection_id).await;
        }

        delivered
    }

    /// Number of users with an open channel.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.channels.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.channels.read().await.is_empty()
    }
}
