//! Menu commands
//!
//! The shell recognizes a fixed set of single tokens. Matching is exact: no
//! trimming, no case folding.

use crate::types::BankError;
use std::fmt;
use std::str::FromStr;

/// A menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewUser,
    Quit,
}

impl Command {
    /// Every command, in menu order
    pub const ALL: [Command; 7] = [
        Command::Deposit,
        Command::Withdraw,
        Command::Statement,
        Command::NewAccount,
        Command::ListAccounts,
        Command::NewUser,
        Command::Quit,
    ];

    /// Token typed at the prompt to select this command
    pub fn token(self) -> &'static str {
        match self {
            Command::Deposit => "d",
            Command::Withdraw => "s",
            Command::Statement => "e",
            Command::NewAccount => "nc",
            Command::ListAccounts => "lc",
            Command::NewUser => "nu",
            Command::Quit => "q",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Command::Deposit => "Depositar",
            Command::Withdraw => "Sacar",
            Command::Statement => "Extrato",
            Command::NewAccount => "Nova conta",
            Command::ListAccounts => "Listar contas",
            Command::NewUser => "Novo usuário",
            Command::Quit => "Sair",
        }
    }
}

impl FromStr for Command {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.token() == s)
            .ok_or_else(|| BankError::invalid_command(s))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]\t{}", self.token(), self.label())
    }
}
