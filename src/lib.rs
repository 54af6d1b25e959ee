//! transaction-manager Library
//!
//! Account registration and transaction recording over PostgreSQL.
//! Re-exports modules for integration testing and the server binary.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod handlers;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use domain::{Account, DomainError, OperationContext, OperationType, Transaction};
pub use error::{AppError, ErrorResponse};
pub use state::AppState;
