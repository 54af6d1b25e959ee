//! PostgreSQL repositories
//!
//! sqlx-backed implementations of the repository ports.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Account, NewTransaction, OperationType};

use super::{
    AccountRepository, OperationTypeRepository, StoreError, StoreResult, TransactionRepository,
};

/// Accounts table adapter
#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, document_number FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_document_number(
        &self,
        document_number: &str,
    ) -> StoreResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, document_number FROM accounts WHERE document_number = $1",
        )
        .bind(document_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn create(&self, document_number: &str) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (document_number) VALUES ($1) RETURNING id",
        )
        .bind(document_number)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        Ok(id)
    }
}

/// Operation types table adapter
#[derive(Debug, Clone)]
pub struct PgOperationTypeRepository {
    pool: PgPool,
}

impl PgOperationTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OperationTypeRepository for PgOperationTypeRepository {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<OperationType>> {
        let operation_type = sqlx::query_as::<_, OperationType>(
            "SELECT id, description, is_debit FROM operation_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operation_type)
    }
}

/// Transactions table adapter
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn create(&self, transaction: &NewTransaction) -> StoreResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (account_id, operation_type_id, amount, event_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(transaction.account_id)
        .bind(transaction.operation_type_id)
        .bind(transaction.amount)
        .bind(transaction.event_date)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)?;

        Ok(id)
    }
}
