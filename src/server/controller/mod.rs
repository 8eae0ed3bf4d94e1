//! HTTP and WebSocket request handlers.
//!
//! Controllers convert DTOs to domain parameters, call the service layer and convert
//! the results back to DTOs. They carry the `utoipa` path annotations used to build
//! the OpenAPI document.

pub mod blood_request;
pub mod inventory;
pub mod realtime;
