use crate::shell::config::{
    BankConfig, DEFAULT_ACCOUNTS_FILE, DEFAULT_BRANCH, DEFAULT_USERS_FILE,
};
use crate::types::Amount;
use clap::Parser;
use std::path::PathBuf;

/// Interactive retail-bank simulator
#[derive(Parser, Debug)]
#[command(name = "bank-shell", version)]
#[command(about = "Interactive retail-bank simulator: deposits, withdrawals, users and accounts", long_about = None)]
pub struct CliArgs {
    /// Largest amount allowed in a single withdrawal
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        help = "Per-transaction withdrawal limit (default: 500)"
    )]
    pub withdrawal_limit: Option<Amount>,

    /// Number of withdrawals allowed per session
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        help = "Withdrawals allowed per session (default: 3)"
    )]
    pub max_withdrawals: Option<u32>,

    /// Branch code for new accounts
    #[arg(long = "branch", value_name = "CODE", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// User data file
    #[arg(long = "users-file", value_name = "PATH", default_value = DEFAULT_USERS_FILE)]
    pub users_file: PathBuf,

    /// Account data file
    #[arg(long = "accounts-file", value_name = "PATH", default_value = DEFAULT_ACCOUNTS_FILE)]
    pub accounts_file: PathBuf,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Missing options take the defaults. Invalid values are replaced by the
    /// defaults with a warning (see [`BankConfig::new`]).
    pub fn to_bank_config(&self) -> BankConfig {
        let default = BankConfig::default();
        BankConfig::new(
            self.withdrawal_limit.unwrap_or(default.withdrawal_limit),
            self.max_withdrawals.unwrap_or(default.max_withdrawals),
            &self.branch,
        )
        .with_paths(&self.users_file, &self.accounts_file)
    }
}
