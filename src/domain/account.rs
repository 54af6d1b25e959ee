//! Account entity

use serde::{Deserialize, Serialize};

use super::document;

/// A registered account holder.
///
/// The `id` is assigned by the store on insert; accounts are never updated
/// or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub document_number: String,
}

impl Account {
    pub fn new(id: i64, document_number: impl Into<String>) -> Self {
        Self {
            id,
            document_number: document_number.into(),
        }
    }

    /// Whether the document number is a checksum-valid CPF or CNPJ.
    pub fn is_document_number_valid(&self) -> bool {
        document::is_document_number_valid(&self.document_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_document_validation() {
        assert!(Account::new(0, "80502674075").is_document_number_valid());
        assert!(Account::new(0, "19931301000167").is_document_number_valid());
        assert!(!Account::new(0, "123456789012345").is_document_number_valid());
    }
}
