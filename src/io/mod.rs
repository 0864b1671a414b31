//! I/O module
//!
//! Handles everything that crosses the process boundary apart from the shell
//! loop itself.
//!
//! # Components
//!
//! - `json_store` - JSON file persistence for users and accounts
//! - `input` - Amount validation and currency formatting for the console

pub mod input;
pub mod json_store;

pub use input::{format_currency, parse_amount};
pub use json_store::JsonStore;
