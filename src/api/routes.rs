//! API Routes
//!
//! HTTP endpoint definitions.

use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Extension, Path, State},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::domain::OperationContext;
use crate::error::AppError;
use crate::handlers::{CreateAccountCommand, CreateTransactionCommand};
use crate::state::AppState;

use super::app_info::app_info;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub document_number: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAccountResponse {
    pub account_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub account_id: i64,
    pub document_number: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub account_id: i64,
    #[serde(deserialize_with = "amount_from_number")]
    pub amount: Decimal,
    pub operation_type_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub transaction_id: i64,
}

/// Bind `amount` from a JSON number only, keeping the digits as written
fn amount_from_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let text = number.to_string();

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| de::Error::custom(format!("amount out of range: {}", text)))
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router (mounted under `/v1`)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account))
        .route("/accounts/:account_id", get(get_account))
        .route("/transactions", post(create_transaction))
        .route("/app-info", get(app_info))
}

/// Turn an extractor rejection into a 400 with the rejection text as details
fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::InvalidRequest(rejection.body_text())
}

// =========================================================================
// POST /accounts
// =========================================================================

/// Create a new account
async fn create_account(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<CreateAccountResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;

    let account_id = state
        .create_account
        .execute(CreateAccountCommand::new(request.document_number), &context)
        .await?;

    Ok(Json(CreateAccountResponse { account_id }))
}

// =========================================================================
// GET /accounts/:account_id
// =========================================================================

/// Get account by ID
async fn get_account(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    account_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Path(account_id) = account_id
        .map_err(|_| AppError::InvalidRequest("Invalid account id".to_string()))?;

    let account = state.get_account.execute(account_id, &context).await?;

    Ok(Json(AccountResponse {
        account_id: account.id,
        document_number: account.document_number,
    }))
}

// =========================================================================
// POST /transactions
// =========================================================================

/// Record a transaction
async fn create_transaction(
    State(state): State<AppState>,
    Extension(context): Extension<OperationContext>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<Json<CreateTransactionResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;

    let command = CreateTransactionCommand::new(
        request.account_id,
        request.operation_type_id,
        request.amount,
    );
    let transaction_id = state.create_transaction.execute(command, &context).await?;

    Ok(Json(CreateTransactionResponse { transaction_id }))
}
