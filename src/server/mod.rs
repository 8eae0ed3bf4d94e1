//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the blood-donation coordination service:
//! API endpoints, the emergency-request lifecycle, data access and the delivery side
//! channels (persisted notifications, real-time push and SMS). The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Request lifecycle, OTP issuing and validation,
//!   inventory adjustment and notification dispatch
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Realtime** (`realtime/`) - Registry of open push channels keyed by user
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, dispatcher, registry)
//! - **Startup** (`startup`) - Tracing, database and SMS gateway initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** runs the state transition inside a database transaction
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** hands best-effort delivery to the dispatcher after commit
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod realtime;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
