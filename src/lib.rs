//! Bank Shell Library
//! # Overview
//!
//! This library provides a single-user, terminal-driven simulation of basic
//! retail-bank operations with JSON-file persistence for users and accounts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, Account, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Session balance, statement and withdrawal policy
//!   - [`core::directory`] - Registered users and opened accounts
//!   - [`core::traits`] - Storage abstraction
//! - [`io`] - JSON persistence and console input validation
//! - [`shell`] - Configuration and the interactive menu loop
//!
//! # Operations
//!
//! - **Deposit** (`d`): Credit a positive amount to the session balance
//! - **Withdraw** (`s`): Debit an amount, subject to balance, per-transaction
//!   limit and per-session withdrawal count
//! - **Statement** (`e`): Print the session's movements and balance
//! - **New user** (`nu`): Register a user, unique by national ID (CPF)
//! - **New account** (`nc`): Open an account for a registered user
//! - **List accounts** (`lc`): Print every opened account
//!
//! # Persistence
//!
//! Users and accounts are written to disk on every successful create and
//! reloaded at startup. The ledger (balance, statement, withdrawal count) is
//! session-only and starts empty on every run.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use self::core::{Directory, Ledger, Movement, MovementKind, RecordStore};
pub use io::{format_currency, parse_amount, JsonStore};
pub use shell::{BankConfig, Command, Shell};
pub use types::{Account, AccountNumber, Amount, BankError, User};
