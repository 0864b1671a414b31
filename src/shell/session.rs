//! Interactive session
//!
//! This module provides the `Shell`, which owns the ledger, the directory and
//! the console streams for one session, and runs the menu loop.
//!
//! # Design
//!
//! The Shell focuses on conversation, delegating:
//! - Amount validation to `io::input::parse_amount`
//! - Money rules to `Ledger`
//! - User and account bookkeeping to `Directory`
//!
//! The console is abstracted as `BufRead` + `Write`, so tests drive a whole
//! session from an in-memory script.
//!
//! # Error Handling
//!
//! Rejections (invalid amounts, policy violations, unknown users, failed data
//! file writes) are reported inline and the loop continues. Only console I/O
//! failures end the session with an error. End of input ends the session the
//! same way the quit command does, including when it arrives in the middle of
//! an operation; that operation is abandoned without changes.

use crate::core::{Directory, Ledger};
use crate::io::input::parse_amount;
use crate::shell::command::Command;
use crate::shell::config::BankConfig;
use crate::types::{BankError, User};
use log::info;
use std::io::{BufRead, Write};

/// One interactive session over a pair of console streams
pub struct Shell<R, W> {
    config: BankConfig,
    ledger: Ledger,
    directory: Directory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session with a fresh ledger
    ///
    /// # Arguments
    ///
    /// * `config` - Withdrawal policy and branch code
    /// * `directory` - Already loaded user and account directory
    /// * `input` - Line-buffered console input
    /// * `output` - Console output
    pub fn new(config: BankConfig, directory: Directory, input: R, output: W) -> Self {
        let ledger = Ledger::from_config(&config);
        Shell {
            config,
            ledger,
            directory,
            input,
            output,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Run the menu loop until quit or end of input
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the console cannot be read or written. End
    /// of input, at the menu or inside an operation, is a normal exit.
    pub fn run(&mut self) -> Result<(), BankError> {
        loop {
            self.render_menu()?;
            let Some(token) = self.read_line()? else {
                info!("end of input, leaving");
                break;
            };

            let command = match token.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if command == Command::Quit {
                writeln!(self.output, "Saindo do sistema. Até mais!")?;
                break;
            }

            match self.execute(command) {
                Err(BankError::InputClosed) => {
                    info!("end of input during {:?}, leaving", command);
                    break;
                }
                other => other?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run one command, reporting recoverable failures to the console
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` on console failure and `BankError::InputClosed`
    /// if input ends before the command has everything it asked for.
    pub fn execute(&mut self, command: Command) -> Result<(), BankError> {
        let outcome = match command {
            Command::Deposit => self.deposit(),
            Command::Withdraw => self.withdraw(),
            Command::Statement => self
                .ledger
                .render_statement(&mut self.output)
                .map_err(Into::into),
            Command::NewAccount => self.new_account(),
            Command::ListAccounts => self
                .directory
                .render_accounts(&mut self.output)
                .map_err(Into::into),
            Command::NewUser => self.new_user(),
            Command::Quit => Ok(()),
        };

        match outcome {
            Err(e @ (BankError::Io { .. } | BankError::InputClosed)) => Err(e),
            Err(e) => {
                info!("{:?} rejected: {:?}", command, e);
                writeln!(self.output, "\n@@@ {} @@@", e)?;
                Ok(())
            }
            Ok(()) => Ok(()),
        }
    }

    fn deposit(&mut self) -> Result<(), BankError> {
        let text = self.ask("Informe o valor do depósito: ")?;
        let amount = parse_amount(&text)?;

        self.ledger.deposit(amount)?;
        writeln!(self.output, "\n=== Depósito realizado com sucesso! ===")?;
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), BankError> {
        let text = self.ask("Informe o valor do saque: ")?;
        let amount = parse_amount(&text)?;

        self.ledger.withdraw(amount)?;
        writeln!(self.output, "\n=== Saque realizado com sucesso! ===")?;
        Ok(())
    }

    fn new_user(&mut self) -> Result<(), BankError> {
        let national_id = self.ask("Informe o CPF (somente número): ")?;
        if self.directory.find_user(&national_id).is_some() {
            return Err(BankError::duplicate_user(&national_id));
        }

        let full_name = self.ask("Informe o nome completo: ")?;
        let birth_date = self.ask("Informe a data de nascimento (dd-mm-aaaa): ")?;
        let address =
            self.ask("Informe o endereço (logradouro, nro - bairro - cidade/sigla estado): ")?;

        self.directory
            .create_user(User::new(full_name, birth_date, national_id, address))?;
        writeln!(self.output, "=== Usuário criado com sucesso! ===")?;
        Ok(())
    }

    fn new_account(&mut self) -> Result<(), BankError> {
        let number = self.directory.next_account_number()?;
        let national_id = self.ask("Informe o CPF do usuário: ")?;

        self.directory
            .create_account(&self.config.branch, number, &national_id)?;
        writeln!(self.output, "\n=== Conta criada com sucesso! ===")?;
        Ok(())
    }

    fn render_menu(&mut self) -> Result<(), BankError> {
        writeln!(self.output, "\n\n================ MENU ================")?;
        for command in Command::ALL {
            writeln!(self.output, "{}", command)?;
        }
        write!(self.output, "=> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read the answer
    fn ask(&mut self, prompt: &str) -> Result<String, BankError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()?.ok_or(BankError::InputClosed)
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, BankError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
