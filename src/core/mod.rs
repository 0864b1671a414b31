//! Core business logic module
//!
//! This module contains the bank's rule-bearing components:
//! - `traits` - Storage abstraction used by the directory
//! - `ledger` - Session balance, statement and withdrawal policy
//! - `directory` - Registered users and opened accounts

pub mod directory;
pub mod ledger;
pub mod traits;

pub use directory::Directory;
pub use ledger::{Ledger, Movement, MovementKind};
pub use traits::RecordStore;
