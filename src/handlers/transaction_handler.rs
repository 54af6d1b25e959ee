//! Transaction Handler
//!
//! Validates and records a single transaction row.

use std::sync::Arc;

use crate::domain::{DomainError, NewTransaction, OperationContext};
use crate::error::AppError;
use crate::store::{AccountRepository, OperationTypeRepository, TransactionRepository};

use super::CreateTransactionCommand;

/// Handler for transaction creation
pub struct CreateTransactionHandler {
    transactions: Arc<dyn TransactionRepository>,
    accounts: Arc<dyn AccountRepository>,
    operation_types: Arc<dyn OperationTypeRepository>,
}

impl CreateTransactionHandler {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        accounts: Arc<dyn AccountRepository>,
        operation_types: Arc<dyn OperationTypeRepository>,
    ) -> Self {
        Self {
            transactions,
            accounts,
            operation_types,
        }
    }

    /// Execute the create transaction command, returning the new
    /// transaction id.
    ///
    /// Checks run in a fixed order: account, operation type, amount sign,
    /// then the insert. The first failing check decides the error.
    pub async fn execute(
        &self,
        command: CreateTransactionCommand,
        context: &OperationContext,
    ) -> Result<i64, AppError> {
        let correlation_id = context.correlation();

        if self.accounts.find_by_id(command.account_id).await?.is_none() {
            tracing::info!(
                correlation_id = %correlation_id,
                account_id = command.account_id,
                "Transaction references unknown account"
            );
            return Err(DomainError::InvalidAccount.into());
        }

        let operation_type = self
            .operation_types
            .find_by_id(command.operation_type_id)
            .await?
            .ok_or_else(|| {
                tracing::info!(
                    correlation_id = %correlation_id,
                    operation_type_id = command.operation_type_id,
                    "Transaction references unknown operation type"
                );
                DomainError::InvalidOperationType
            })?;

        if !operation_type.is_amount_valid(command.amount) {
            tracing::info!(
                correlation_id = %correlation_id,
                amount = %command.amount,
                operation_type = %operation_type.description,
                is_debit = operation_type.is_debit,
                "Amount sign does not match operation type"
            );
            return Err(DomainError::InvalidAmountForOperationType.into());
        }

        let transaction = NewTransaction::new(
            command.account_id,
            command.operation_type_id,
            command.amount,
        );
        let transaction_id = self.transactions.create(&transaction).await?;

        tracing::info!(
            correlation_id = %correlation_id,
            transaction_id = transaction_id,
            account_id = command.account_id,
            operation_type_id = command.operation_type_id,
            "Transaction created"
        );

        Ok(transaction_id)
    }
}
