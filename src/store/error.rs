//! Store Errors

/// Errors raised by repository adapters.
///
/// Use cases never inspect these; they pass through to the HTTP layer,
/// which reports them as server errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Classify a sqlx error, lifting unique violations out of the generic
    /// database bucket.
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = error {
            if db_error.is_unique_violation() {
                let constraint = db_error
                    .constraint()
                    .unwrap_or("unknown constraint")
                    .to_string();
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Database(error)
    }

    /// Check if this error is a unique constraint violation
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_stays_database_error() {
        let err = StoreError::from_sqlx(sqlx::Error::RowNotFound);

        assert!(matches!(err, StoreError::Database(_)));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn test_unique_violation_flag() {
        let err = StoreError::UniqueViolation("accounts_document_number_key".to_string());

        assert!(err.is_unique_violation());
        assert!(err.to_string().contains("accounts_document_number_key"));
    }
}
