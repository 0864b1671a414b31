//! Error types for the bank shell
//!
//! This module defines all error types that can occur while operating the shell.
//! Display strings are the messages shown to the person at the terminal.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Non-numeric or non-positive amounts
//! - **Policy Rejections**: Overdraft, withdrawal limit, withdrawal count,
//!   duplicate user, unknown user for account opening
//! - **Command Errors**: Unrecognized menu option
//! - **Input Errors**: Console input closed mid-operation
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Infrastructure Errors**: Console I/O and data file failures

use crate::types::Amount;
use thiserror::Error;

/// Main error type for the bank shell
///
/// Every variant except the infrastructure ones and `InputClosed` is
/// recoverable: the shell reports it and returns to the menu with state
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Amount text is not a number, or is not strictly positive
    #[error("Operação falhou! O valor informado é inválido.")]
    InvalidAmount {
        /// The text that was entered
        input: String,
    },

    /// Withdrawal larger than the current balance
    #[error("Operação falhou! Você não tem saldo suficiente.")]
    InsufficientFunds {
        /// Balance at the time of the attempt
        balance: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Withdrawal larger than the per-transaction limit
    #[error("Operação falhou! O valor do saque excede o limite.")]
    WithdrawalLimitExceeded {
        /// Configured per-transaction limit
        limit: Amount,
        /// Requested withdrawal amount
        requested: Amount,
    },

    /// Session withdrawal count already at its maximum
    #[error("Operação falhou! Número máximo de saques excedido.")]
    MaxWithdrawalsReached {
        /// Configured maximum number of withdrawals
        max: u32,
    },

    /// A user with this national ID already exists
    #[error("Já existe usuário com esse CPF!")]
    DuplicateUser {
        /// The national ID that is already registered
        national_id: String,
    },

    /// No user with this national ID exists
    #[error("Usuário não encontrado, fluxo de criação de conta encerrado!")]
    UserNotFound {
        /// The national ID that was looked up
        national_id: String,
    },

    /// Menu option not recognized
    #[error("Operação inválida, por favor selecione novamente a operação desejada.")]
    InvalidCommand {
        /// The token that was entered
        command: String,
    },

    /// Console input ended in the middle of an operation
    ///
    /// The operation is abandoned without changes and the session ends.
    #[error("Entrada encerrada.")]
    InputClosed,

    /// Arithmetic overflow would occur
    #[error("Operação falhou! Estouro aritmético em {operation}.")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Console or file I/O error
    #[error("Erro de E/S: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A data file could not be read, parsed or written
    #[error("Erro no arquivo de dados {path}: {message}")]
    Persistence {
        /// Path of the data file
        path: String,
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        BankError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Amount, requested: Amount) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create a WithdrawalLimitExceeded error
    pub fn withdrawal_limit_exceeded(limit: Amount, requested: Amount) -> Self {
        BankError::WithdrawalLimitExceeded { limit, requested }
    }

    /// Create a MaxWithdrawalsReached error
    pub fn max_withdrawals_reached(max: u32) -> Self {
        BankError::MaxWithdrawalsReached { max }
    }

    /// Create a DuplicateUser error
    pub fn duplicate_user(national_id: &str) -> Self {
        BankError::DuplicateUser {
            national_id: national_id.to_string(),
        }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(national_id: &str) -> Self {
        BankError::UserNotFound {
            national_id: national_id.to_string(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str) -> Self {
        BankError::InvalidCommand {
            command: command.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a Persistence error for the data file at `path`
    pub fn persistence(path: &std::path::Path, message: impl ToString) -> Self {
        BankError::Persistence {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the shell can report this error and keep going
    ///
    /// Infrastructure errors and closed input are not recoverable; everything
    /// else is a rejection that leaves state unchanged.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BankError::Io { .. } | BankError::Persistence { .. } | BankError::InputClosed
        )
    }
}
