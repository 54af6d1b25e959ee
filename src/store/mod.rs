//! Store module
//!
//! Repository ports consumed by the use cases, plus the PostgreSQL and
//! in-memory adapters that implement them.

mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Account, NewTransaction, OperationType};

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::{PgAccountRepository, PgOperationTypeRepository, PgTransactionRepository};

/// Result type for repository calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence port for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Point lookup by primary key
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>>;

    /// Point lookup by document number
    async fn find_by_document_number(&self, document_number: &str)
        -> StoreResult<Option<Account>>;

    /// Insert a new account and return the id the store assigned
    async fn create(&self, document_number: &str) -> StoreResult<i64>;
}

/// Read-only access to operation type reference data.
#[async_trait]
pub trait OperationTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<OperationType>>;
}

/// Persistence port for transactions.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Insert a transaction and return the id the store assigned
    async fn create(&self, transaction: &NewTransaction) -> StoreResult<i64>;
}
