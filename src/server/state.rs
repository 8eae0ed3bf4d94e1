//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Notification dispatcher for best-effort donor alerts and admin broadcasts
//! - Registry of open real-time channels, owned here so the WebSocket handler can
//!   register and deregister connections

use sea_orm::DatabaseConnection;

use super::{realtime::registry::ConnectionRegistry, service::notification::NotificationDispatcher};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `NotificationDispatcher` holds a pool clone and `Arc`s
/// - `ConnectionRegistry` wraps its map in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Dispatcher used by the lifecycle service for notifications and broadcasts.
    pub dispatcher: NotificationDispatcher,

    /// Open real-time channels keyed by user ID.
    ///
    /// The dispatcher holds a clone of the same registry.
    pub registry: ConnectionRegistry,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `dispatcher` - Notification dispatcher
    /// - `registry` - Real-time connection registry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        dispatcher: NotificationDispatcher,
        registry: ConnectionRegistry,
    ) -> Self {
        Self {
            db,
            dispatcher,
            registry,
        }
    }
}
