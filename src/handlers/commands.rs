//! Command definitions
//!
//! Commands represent intentions to change the system state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Command to register a new account holder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountCommand {
    /// CPF or CNPJ, digits only
    pub document_number: String,
}

impl CreateAccountCommand {
    pub fn new(document_number: impl Into<String>) -> Self {
        Self {
            document_number: document_number.into(),
        }
    }
}

/// Command to record a transaction against an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionCommand {
    pub account_id: i64,
    pub operation_type_id: i32,
    /// Signed amount; debits are negative, credits positive
    pub amount: Decimal,
}

impl CreateTransactionCommand {
    pub fn new(account_id: i64, operation_type_id: i32, amount: Decimal) -> Self {
        Self {
            account_id,
            operation_type_id,
            amount,
        }
    }
}
