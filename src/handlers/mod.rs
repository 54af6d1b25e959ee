//! Command Handlers module
//!
//! Use cases that orchestrate validation and repository calls.
//! Each handler depends only on the repository ports it needs.

mod account_handler;
mod commands;
mod transaction_handler;


pub use account_handler::{CreateAccountHandler, GetAccountHandler};
pub use commands::*;
pub use transaction_handler::CreateTransactionHandler;
