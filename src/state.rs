//! Shared application state
//!
//! Wires repository adapters into the use-case handlers the HTTP layer calls.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::AppInfo;
use crate::handlers::{CreateAccountHandler, CreateTransactionHandler, GetAccountHandler};
use crate::store::{
    AccountRepository, MemoryStore, OperationTypeRepository, PgAccountRepository,
    PgOperationTypeRepository, PgTransactionRepository, TransactionRepository,
};

/// State handed to every route
#[derive(Clone)]
pub struct AppState {
    pub create_account: Arc<CreateAccountHandler>,
    pub get_account: Arc<GetAccountHandler>,
    pub create_transaction: Arc<CreateTransactionHandler>,
    pub app_info: AppInfo,
}

impl AppState {
    /// Build state over any set of repository implementations
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        operation_types: Arc<dyn OperationTypeRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            create_account: Arc::new(CreateAccountHandler::new(accounts.clone())),
            get_account: Arc::new(GetAccountHandler::new(accounts.clone())),
            create_transaction: Arc::new(CreateTransactionHandler::new(
                transactions,
                accounts,
                operation_types,
            )),
            app_info: AppInfo::from_build(),
        }
    }

    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgOperationTypeRepository::new(pool.clone())),
            Arc::new(PgTransactionRepository::new(pool)),
        )
    }

    /// State backed by a single in-memory store
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self::new(store.clone(), store.clone(), store)
    }
}
