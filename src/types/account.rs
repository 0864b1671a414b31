//! Account-related types for the bank shell
//!
//! This module defines the Account structure. An account is opened for an
//! existing user and keeps a copy of that user's record as it was at the time
//! the account was created.

use super::user::User;
use serde::{Deserialize, Serialize};

/// Account number
///
/// Assigned sequentially starting at 1.
pub type AccountNumber = u32;

/// Checking account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Branch code (fixed per installation, `0001` by default)
    #[serde(rename = "agencia")]
    pub branch: String,

    /// Sequential account number
    #[serde(rename = "numero_conta")]
    pub number: AccountNumber,

    /// Snapshot of the owner at account-opening time
    ///
    /// This is an embedded copy, not a reference into the user directory.
    #[serde(rename = "usuario")]
    pub owner: User,
}

impl Account {
    /// Open an account for `owner`
    ///
    /// # Arguments
    ///
    /// * `branch` - The branch code
    /// * `number` - The account number
    /// * `owner` - The owning user; cloned by the caller if needed
    pub fn new(branch: impl Into<String>, number: AccountNumber, owner: User) -> Self {
        Account {
            branch: branch.into(),
            number,
            owner,
        }
    }
}
