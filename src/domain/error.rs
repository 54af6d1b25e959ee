//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Business rule violations raised by the use cases.
///
/// These errors are independent of the web/infrastructure layer; the HTTP
/// layer decides which status code each one maps to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Document number is neither a valid CPF nor a valid CNPJ
    #[error("Invalid document number")]
    InvalidDocumentNumber,

    /// An account with the same document number is already registered
    #[error("Account already exists")]
    AccountAlreadyExists,

    /// Requested account does not exist
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    /// Transaction references an account that does not exist
    #[error("Invalid account")]
    InvalidAccount,

    /// Transaction references an operation type that does not exist
    #[error("Invalid operation type")]
    InvalidOperationType,

    /// Amount is zero or its sign disagrees with the operation type
    #[error("Invalid amount for operation type")]
    InvalidAmountForOperationType,
}

impl DomainError {
    /// Caller sent something the rules reject; answered with 400
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDocumentNumber
                | Self::InvalidAccount
                | Self::InvalidOperationType
                | Self::InvalidAmountForOperationType
        )
    }

    /// Clashes with existing state; answered with 409
    pub fn is_conflict_error(&self) -> bool {
        matches!(self, Self::AccountAlreadyExists)
    }

    /// Stable machine-readable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDocumentNumber => "invalid_document_number",
            Self::AccountAlreadyExists => "account_already_exists",
            Self::AccountNotFound(_) => "account_not_found",
            Self::InvalidAccount => "invalid_account",
            Self::InvalidOperationType => "invalid_operation_type",
            Self::InvalidAmountForOperationType => "invalid_amount_for_operation_type",
        }
    }
}
