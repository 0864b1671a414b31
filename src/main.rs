//! Bank Shell CLI
//!
//! Interactive menu for deposits, withdrawals, statements, user registration
//! and account opening.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --withdrawal-limit 1000 --max-withdrawals 5
//! cargo run -- --users-file data/usuarios.json --accounts-file data/contas.json
//! RUST_LOG=debug cargo run
//! ```
//!
//! Menu, prompts and results go to stdout; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Quit command or end of input
//! - 1: Error (corrupt data file, console I/O failure)

use bank_shell::cli;
use bank_shell::shell;
use env_logger::Env;
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_bank_config();

    if let Err(e) = shell::run_interactive(config) {
        eprintln!("Erro: {}", e);
        process::exit(1);
    }
}
