//! Interactive shell module
//!
//! This module wires the configuration, the persisted directory and the
//! console together into one menu-driven session.
//!
//! # Components
//!
//! - `config` - Startup configuration (`BankConfig`)
//! - `command` - Menu commands and their tokens
//! - `session` - The menu loop (`Shell`)

pub mod command;
pub mod config;
pub mod session;

pub use command::Command;
pub use config::BankConfig;
pub use session::Shell;

use crate::core::Directory;
use crate::io::JsonStore;
use crate::types::{Account, BankError, User};
use std::io;

/// Open the directory described by `config`
///
/// # Errors
///
/// Returns `BankError::Persistence` if either data file exists but cannot be
/// read or parsed. Missing files are treated as empty collections.
pub fn open_directory(config: &BankConfig) -> Result<Directory, BankError> {
    Directory::open(
        Box::new(JsonStore::<User>::new(&config.users_path)),
        Box::new(JsonStore::<Account>::new(&config.accounts_path)),
    )
}

/// Run a session on the process's stdin and stdout
///
/// Loads the directory first; a corrupt data file is fatal and no menu is
/// shown.
pub fn run_interactive(config: BankConfig) -> Result<(), BankError> {
    let directory = open_directory(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, directory, stdin.lock(), stdout.lock());
    shell.run()
}
