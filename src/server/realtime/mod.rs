//! Real-time push channels.
//!
//! Holds the process-wide registry of open WebSocket channels. The registry is created
//! at startup, stored in `AppState` and shared with the notification dispatcher.

pub mod registry;
