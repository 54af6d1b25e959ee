//! Domain module
//!
//! Core domain types and validation rules.

pub mod account;
pub mod context;
pub mod document;
pub mod error;
pub mod operation_type;
pub mod transaction;

pub use account::Account;
pub use context::OperationContext;
pub use document::{is_document_number_valid, DocumentKind};
pub use error::DomainError;
pub use operation_type::OperationType;
pub use transaction::{NewTransaction, Transaction};
