//! Runtime configuration for the shell
//!
//! Everything that used to be a fixed constant of the program (withdrawal
//! policy, branch code, data file names) lives in [`BankConfig`] and is handed
//! to the shell at startup.

use crate::types::Amount;
use log::warn;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Default per-transaction withdrawal limit
pub const DEFAULT_WITHDRAWAL_LIMIT: i64 = 500;
/// Default number of withdrawals allowed per session
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;
/// Default branch code for new accounts
pub const DEFAULT_BRANCH: &str = "0001";
/// Default user data file, relative to the working directory
pub const DEFAULT_USERS_FILE: &str = "usuarios.json";
/// Default account data file, relative to the working directory
pub const DEFAULT_ACCOUNTS_FILE: &str = "contas.json";

/// Shell configuration
#[derive(Clone, Debug, PartialEq)]
pub struct BankConfig {
    /// Largest amount allowed in a single withdrawal
    pub withdrawal_limit: Amount,
    /// Number of withdrawals allowed per session
    pub max_withdrawals: u32,
    /// Branch code assigned to new accounts
    pub branch: String,
    /// Path of the user data file
    pub users_path: PathBuf,
    /// Path of the account data file
    pub accounts_path: PathBuf,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::new(DEFAULT_WITHDRAWAL_LIMIT, 0),
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
            branch: DEFAULT_BRANCH.to_string(),
            users_path: PathBuf::from(DEFAULT_USERS_FILE),
            accounts_path: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
        }
    }
}

impl BankConfig {
    /// Create a new BankConfig with custom withdrawal policy and branch
    ///
    /// Values that make no sense fall back to the defaults with a warning:
    /// a non-positive withdrawal limit, zero allowed withdrawals, or a blank
    /// branch code. File paths keep their defaults; see
    /// [`with_paths`](Self::with_paths).
    pub fn new(withdrawal_limit: Amount, max_withdrawals: u32, branch: &str) -> Self {
        let default = Self::default();

        let withdrawal_limit = if withdrawal_limit <= Decimal::ZERO {
            warn!(
                "Invalid withdrawal_limit ({}), using default ({})",
                withdrawal_limit, default.withdrawal_limit
            );
            default.withdrawal_limit
        } else {
            withdrawal_limit
        };

        let max_withdrawals = if max_withdrawals == 0 {
            warn!(
                "Invalid max_withdrawals ({}), using default ({})",
                max_withdrawals, default.max_withdrawals
            );
            default.max_withdrawals
        } else {
            max_withdrawals
        };

        let branch = if branch.trim().is_empty() {
            warn!("Empty branch code, using default ({})", default.branch);
            default.branch
        } else {
            branch.trim().to_string()
        };

        Self {
            withdrawal_limit,
            max_withdrawals,
            branch,
            ..default
        }
    }

    /// Replace the data file locations
    pub fn with_paths(
        mut self,
        users_path: impl Into<PathBuf>,
        accounts_path: impl Into<PathBuf>,
    ) -> Self {
        self.users_path = users_path.into();
        self.accounts_path = accounts_path.into();
        self
    }
}
