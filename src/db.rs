//! Database module
//!
//! Connection pool construction and schema verification.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::OperationType;

/// Tables the service reads and writes
const REQUIRED_TABLES: [&str; 3] = ["accounts", "operation_types", "transactions"];

/// Build the connection pool from configuration
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect_with(config.target.connect_options()?)
        .await
}

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Check that required tables exist and the reference data is seeded.
/// Note: the schema lives in raw SQL files under migrations/
pub async fn check_schema(pool: &PgPool) -> Result<bool, sqlx::Error> {
    for table in REQUIRED_TABLES {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )
            "#,
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    check_operation_types(pool).await
}

/// Check the default operation types are present
async fn check_operation_types(pool: &PgPool) -> Result<bool, sqlx::Error> {
    for operation_type in OperationType::defaults() {
        let is_debit: Option<bool> =
            sqlx::query_scalar("SELECT is_debit FROM operation_types WHERE id = $1")
                .bind(operation_type.id)
                .fetch_optional(pool)
                .await?;

        match is_debit {
            None => {
                tracing::error!(
                    "Required operation type {} ({}) does not exist. Please run database seed.",
                    operation_type.id,
                    operation_type.description
                );
                return Ok(false);
            }
            Some(is_debit) if is_debit != operation_type.is_debit => {
                tracing::warn!(
                    "Operation type {} has is_debit = {}, expected {}",
                    operation_type.id,
                    is_debit,
                    operation_type.is_debit
                );
            }
            Some(_) => {}
        }
    }

    tracing::info!("Operation types verified");
    Ok(true)
}
