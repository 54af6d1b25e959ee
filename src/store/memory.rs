//! In-memory repositories
//!
//! A single process-local store implementing every repository port. It
//! enforces the same unique document constraint as the database schema and
//! has a fault switch so callers can exercise store-failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Account, NewTransaction, OperationType, Transaction};

use super::{
    AccountRepository, OperationTypeRepository, StoreError, StoreResult, TransactionRepository,
};

#[derive(Debug, Default)]
struct Tables {
    accounts: Vec<Account>,
    operation_types: HashMap<i32, OperationType>,
    transactions: Vec<Transaction>,
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
    account_inserts: AtomicUsize,
    transaction_inserts: AtomicUsize,
}

impl MemoryStore {
    /// Empty store with no operation types
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the default operation types
    pub fn seeded() -> Self {
        let operation_types = OperationType::defaults()
            .into_iter()
            .map(|operation_type| (operation_type.id, operation_type))
            .collect();

        Self {
            tables: Mutex::new(Tables {
                operation_types,
                ..Tables::default()
            }),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail (or succeed again) with
    /// `StoreError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful account inserts
    pub fn account_inserts(&self) -> usize {
        self.account_inserts.load(Ordering::SeqCst)
    }

    /// Number of successful transaction inserts
    pub fn transaction_inserts(&self) -> usize {
        self.transaction_inserts.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored transactions
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.tables.lock().await.transactions.clone()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        self.check_available()?;
        let tables = self.tables.lock().await;
        Ok(tables.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_document_number(
        &self,
        document_number: &str,
    ) -> StoreResult<Option<Account>> {
        self.check_available()?;
        let tables = self.tables.lock().await;
        Ok(tables
            .accounts
            .iter()
            .find(|a| a.document_number == document_number)
            .cloned())
    }

    async fn create(&self, document_number: &str) -> StoreResult<i64> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;

        if tables
            .accounts
            .iter()
            .any(|a| a.document_number == document_number)
        {
            return Err(StoreError::UniqueViolation(
                "accounts_document_number_key".to_string(),
            ));
        }

        let id = tables.accounts.len() as i64 + 1;
        tables.accounts.push(Account::new(id, document_number));
        self.account_inserts.fetch_add(1, Ordering::SeqCst);

        Ok(id)
    }
}

#[async_trait]
impl OperationTypeRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<OperationType>> {
        self.check_available()?;
        let tables = self.tables.lock().await;
        Ok(tables.operation_types.get(&id).cloned())
    }
}

#[async_trait]
impl TransactionRepository for MemoryStore {
    async fn create(&self, transaction: &NewTransaction) -> StoreResult<i64> {
        self.check_available()?;
        let mut tables = self.tables.lock().await;

        let id = tables.transactions.len() as i64 + 1;
        tables
            .transactions
            .push(transaction.clone().into_transaction(id));
        self.transaction_inserts.fetch_add(1, Ordering::SeqCst);

        Ok(id)
    }
}
