//! Transaction entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub operation_type_id: i32,
    pub amount: Decimal,
    pub event_date: DateTime<Utc>,
}

/// A validated transaction waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub account_id: i64,
    pub operation_type_id: i32,
    pub amount: Decimal,
    pub event_date: DateTime<Utc>,
}

impl NewTransaction {
    /// Stamp a new transaction with the current time.
    pub fn new(account_id: i64, operation_type_id: i32, amount: Decimal) -> Self {
        Self {
            account_id,
            operation_type_id,
            amount,
            event_date: Utc::now(),
        }
    }

    /// Attach the store-assigned id.
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            account_id: self.account_id,
            operation_type_id: self.operation_type_id,
            amount: self.amount,
            event_date: self.event_date,
        }
    }
}
