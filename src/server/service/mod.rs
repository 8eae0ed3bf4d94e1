//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Request state transitions, OTP issuing and validation
//! - **Orchestration**: Coordinating repository calls and the notification side channels
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-row state changes in one database transaction

pub mod inventory;
pub mod lifecycle;
pub mod notification;
pub mod otp;
