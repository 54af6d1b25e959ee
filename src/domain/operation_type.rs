//! Operation type reference data

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A class of transaction (purchase, withdrawal, payment...).
///
/// Operation types are seeded reference data; this service only reads them.
/// `is_debit` fixes the sign every transaction of this type must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OperationType {
    pub id: i32,
    pub description: String,
    pub is_debit: bool,
}

impl OperationType {
    pub fn new(id: i32, description: impl Into<String>, is_debit: bool) -> Self {
        Self {
            id,
            description: description.into(),
            is_debit,
        }
    }

    /// Debits must be negative, credits positive, and zero is never valid.
    pub fn is_amount_valid(&self, amount: Decimal) -> bool {
        if amount.is_zero() {
            return false;
        }
        if self.is_debit {
            amount.is_sign_negative()
        } else {
            amount.is_sign_positive()
        }
    }

    /// Operation types the schema seeds on a fresh database.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(1, "COMPRA A VISTA", true),
            Self::new(2, "COMPRA PARCELADA", true),
            Self::new(3, "SAQUE", true),
            Self::new(4, "PAGAMENTO", false),
        ]
    }
}
