//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `user`: Registered bank customers
//! - `account`: Checking accounts and their embedded owner snapshot
//! - `error`: Error types for the bank shell

pub mod account;
pub mod error;
pub mod user;

pub use account::{Account, AccountNumber};
pub use error::BankError;
pub use user::User;

/// Monetary amount
///
/// Exact decimal arithmetic; every balance and movement uses this type.
pub type Amount = rust_decimal::Decimal;
