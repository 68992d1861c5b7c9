//! Users Domain
//!
//! Layered CRUD domain for user records, with structured logging and timing
//! instrumentation around every store access.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ Controller  │  ← maps outcomes to response shapes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← timing + structured log events, pass-through
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entities, DTOs
//! └─────────────┘
//! ```
//!
//! The service also emits to the [`UserLogger`] boundary on every call,
//! both on success and on failure. Store faults pass through the service
//! and the controller unhandled; only "not found" (`None`) and refused
//! writes (`false`) are control flow.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use domain_users::{
//!     InMemoryUserRepository, TracingUserLogger, UserController, UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository, Arc::new(TracingUserLogger::new()));
//! let controller = UserController::new(service);
//! ```

pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use controller::{ApiResponse, ResponseBody, UserController};
pub use error::{UserError, UserResult};
pub use logging::{LogValue, TracingUserLogger, UserLogger};
pub use models::{CreateUserRequest, User, UserResponse};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
