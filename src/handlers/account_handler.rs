//! Account Handlers
//!
//! Account registration and lookup.

use std::sync::Arc;

use crate::domain::{is_document_number_valid, Account, DomainError, OperationContext};
use crate::error::AppError;
use crate::store::AccountRepository;

use super::CreateAccountCommand;

/// Handler for account creation
pub struct CreateAccountHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl CreateAccountHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Execute the create account command, returning the new account id.
    ///
    /// The document is validated before the store is consulted, so an
    /// invalid document never reaches the repository.
    pub async fn execute(
        &self,
        command: CreateAccountCommand,
        context: &OperationContext,
    ) -> Result<i64, AppError> {
        let correlation_id = context.correlation();

        if !is_document_number_valid(&command.document_number) {
            tracing::info!(correlation_id = %correlation_id, "Rejected invalid document number");
            return Err(DomainError::InvalidDocumentNumber.into());
        }

        // Uniqueness is also enforced by the store; this check gives the
        // common case a domain error instead of a constraint violation
        let existing = self
            .accounts
            .find_by_document_number(&command.document_number)
            .await?;

        if let Some(account) = existing {
            tracing::info!(
                correlation_id = %correlation_id,
                account_id = account.id,
                "Account already exists for document"
            );
            return Err(DomainError::AccountAlreadyExists.into());
        }

        let account_id = self.accounts.create(&command.document_number).await?;

        tracing::info!(
            correlation_id = %correlation_id,
            account_id = account_id,
            "Account created"
        );

        Ok(account_id)
    }
}

/// Handler for account lookup
pub struct GetAccountHandler {
    accounts: Arc<dyn AccountRepository>,
}

impl GetAccountHandler {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Fetch an account by id
    pub async fn execute(
        &self,
        account_id: i64,
        context: &OperationContext,
    ) -> Result<Account, AppError> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::AccountNotFound(account_id))?;

        tracing::debug!(
            correlation_id = %context.correlation(),
            account_id = account.id,
            "Account found"
        );

        Ok(account)
    }
}
