//! Request and response bodies exchanged with API clients.

pub mod api;
pub mod blood_request;
pub mod inventory;
pub mod realtime;
