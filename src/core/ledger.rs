//! Session ledger
//!
//! This module provides the `Ledger` struct which holds the money side of a
//! session: the balance, the statement of movements and the number of
//! withdrawals made so far. None of it is persisted; every process start
//! begins with a zero balance and an empty statement.
//!
//! The Ledger is responsible for:
//! - Applying deposits
//! - Enforcing the withdrawal policy (balance, per-transaction limit, count)
//! - Rendering the statement for the console

use crate::io::input::format_currency;
use crate::shell::BankConfig;
use crate::types::{Amount, BankError};
use log::debug;
use rust_decimal::Decimal;
use std::fmt;
use std::io::{self, Write};

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Money credited to the balance
    Deposit,
    /// Money debited from the balance
    Withdrawal,
}

/// A single statement entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub kind: MovementKind,
    pub amount: Amount,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MovementKind::Deposit => write!(f, "Depósito:\t{}", format_currency(self.amount)),
            MovementKind::Withdrawal => write!(f, "Saque:\t\t{}", format_currency(self.amount)),
        }
    }
}

/// Session-scoped balance, statement and withdrawal counter
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: Amount,
    statement: Vec<Movement>,
    withdrawals: u32,
    withdrawal_limit: Amount,
    max_withdrawals: u32,
}

impl Ledger {
    /// Create an empty ledger with the given withdrawal policy
    ///
    /// # Arguments
    ///
    /// * `withdrawal_limit` - Largest amount allowed in a single withdrawal
    /// * `max_withdrawals` - Number of withdrawals allowed per session
    pub fn new(withdrawal_limit: Amount, max_withdrawals: u32) -> Self {
        Ledger {
            balance: Decimal::ZERO,
            statement: Vec::new(),
            withdrawals: 0,
            withdrawal_limit,
            max_withdrawals,
        }
    }

    /// Create an empty ledger using the policy from `config`
    pub fn from_config(config: &BankConfig) -> Self {
        Self::new(config.withdrawal_limit, config.max_withdrawals)
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn statement(&self) -> &[Movement] {
        &self.statement
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn withdrawal_limit(&self) -> Amount {
        self.withdrawal_limit
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    /// Credit `amount` to the balance
    ///
    /// The amount is expected to be positive already (see
    /// [`parse_amount`](crate::io::parse_amount)). Appends one statement line.
    ///
    /// # Errors
    ///
    /// Returns `BankError::ArithmeticOverflow` if the new balance is not
    /// representable; the ledger is left unchanged.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), BankError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit"))?;

        self.balance = new_balance;
        self.statement.push(Movement {
            kind: MovementKind::Deposit,
            amount,
        });

        debug!("deposit of {} applied, balance {}", amount, self.balance);
        Ok(())
    }

    /// Debit `amount` from the balance, subject to the withdrawal policy
    ///
    /// The checks run in a fixed order and only the first failing one is
    /// reported:
    /// 1. `amount` greater than the balance
    /// 2. `amount` greater than the per-transaction limit
    /// 3. withdrawal count already at the session maximum
    ///
    /// On success the balance decreases, one statement line is appended and
    /// the withdrawal count goes up by one. On any error nothing changes.
    ///
    /// # Errors
    ///
    /// - `BankError::InsufficientFunds`
    /// - `BankError::WithdrawalLimitExceeded`
    /// - `BankError::MaxWithdrawalsReached`
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount > self.balance {
            return Err(BankError::insufficient_funds(self.balance, amount));
        }

        if amount > self.withdrawal_limit {
            return Err(BankError::withdrawal_limit_exceeded(
                self.withdrawal_limit,
                amount,
            ));
        }

        if self.withdrawals >= self.max_withdrawals {
            return Err(BankError::max_withdrawals_reached(self.max_withdrawals));
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;

        self.balance = new_balance;
        self.statement.push(Movement {
            kind: MovementKind::Withdrawal,
            amount,
        });
        self.withdrawals += 1;

        debug!(
            "withdrawal {}/{} of {} applied, balance {}",
            self.withdrawals, self.max_withdrawals, amount, self.balance
        );
        Ok(())
    }

    /// Write the statement block to `out`
    ///
    /// An empty statement prints a "no movements" placeholder. The balance is
    /// always printed with two decimal places.
    pub fn render_statement<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n================ EXTRATO ================")?;

        if self.statement.is_empty() {
            writeln!(out, "Não foram realizadas movimentações.")?;
        } else {
            for movement in &self.statement {
                writeln!(out, "{}", movement)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "\nSaldo:\t\t{}", format_currency(self.balance))?;
        writeln!(out, "{}", "=".repeat(42))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    #[fixture]
    fn ledger() -> Ledger {
        Ledger::new(dec(500), 3)
    }

    fn rendered(ledger: &Ledger) -> String {
        let mut output = Vec::new();
        ledger.render_statement(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    fn test_new_ledger_is_empty(ledger: Ledger) {
        assert_eq!(ledger.balance(), Decimal::ZERO);
        assert!(ledger.statement().is_empty());
        assert_eq!(ledger.withdrawals(), 0);
    }

    #[test]
    fn test_from_config_uses_policy() {
        let config = BankConfig::default();
        let ledger = Ledger::from_config(&config);

        assert_eq!(ledger.withdrawal_limit(), dec(500));
        assert_eq!(ledger.max_withdrawals(), 3);
    }

    #[rstest]
    #[case::whole(dec(100))]
    #[case::cents(Decimal::new(1999, 2))]
    #[case::above_limit(dec(10_000))]
    fn test_deposit_adds_amount_and_one_line(mut ledger: Ledger, #[case] amount: Decimal) {
        ledger.deposit(dec(7)).unwrap();

        ledger.deposit(amount).unwrap();

        assert_eq!(ledger.balance(), dec(7) + amount);
        assert_eq!(ledger.statement().len(), 2);
        assert_eq!(
            ledger.statement()[1],
            Movement {
                kind: MovementKind::Deposit,
                amount
            }
        );
    }

    #[rstest]
    fn test_deposit_overflow_leaves_state_unchanged(mut ledger: Ledger) {
        ledger.deposit(Decimal::MAX).unwrap();

        let result = ledger.deposit(dec(1));

        assert_eq!(result, Err(BankError::arithmetic_overflow("deposit")));
        assert_eq!(ledger.balance(), Decimal::MAX);
        assert_eq!(ledger.statement().len(), 1);
    }

    #[rstest]
    fn test_deposit_then_withdraw(mut ledger: Ledger) {
        ledger.deposit(Decimal::new(10000, 2)).unwrap();
        ledger.withdraw(Decimal::new(5000, 2)).unwrap();

        assert_eq!(ledger.balance(), Decimal::new(5000, 2));
        assert_eq!(ledger.statement().len(), 2);
        assert_eq!(ledger.withdrawals(), 1);
    }

    #[rstest]
    #[case::small(dec(100), dec(101))]
    #[case::also_over_limit(dec(100), dec(900))]
    #[case::empty_balance(Decimal::ZERO, dec(1))]
    fn test_withdraw_over_balance_reports_insufficient_funds(
        mut ledger: Ledger,
        #[case] balance: Decimal,
        #[case] amount: Decimal,
    ) {
        if balance > Decimal::ZERO {
            ledger.deposit(balance).unwrap();
        }
        let before = ledger.clone();

        let result = ledger.withdraw(amount);

        assert_eq!(result, Err(BankError::insufficient_funds(balance, amount)));
        assert_eq!(ledger.balance(), before.balance());
        assert_eq!(ledger.statement(), before.statement());
        assert_eq!(ledger.withdrawals(), before.withdrawals());
    }

    #[rstest]
    #[case::just_over(Decimal::new(50001, 2))]
    #[case::far_over(dec(1000))]
    fn test_withdraw_over_limit_reports_limit(mut ledger: Ledger, #[case] amount: Decimal) {
        ledger.deposit(dec(2000)).unwrap();

        let result = ledger.withdraw(amount);

        assert_eq!(
            result,
            Err(BankError::withdrawal_limit_exceeded(dec(500), amount))
        );
        assert_eq!(ledger.balance(), dec(2000));
        assert_eq!(ledger.statement().len(), 1);
        assert_eq!(ledger.withdrawals(), 0);
    }

    #[rstest]
    fn test_withdraw_exactly_limit_succeeds(mut ledger: Ledger) {
        ledger.deposit(dec(500)).unwrap();

        ledger.withdraw(dec(500)).unwrap();

        assert_eq!(ledger.balance(), Decimal::ZERO);
    }

    #[rstest]
    fn test_fourth_withdrawal_rejected_by_count(mut ledger: Ledger) {
        ledger.deposit(dec(100)).unwrap();

        for _ in 0..3 {
            ledger.withdraw(dec(10)).unwrap();
        }
        let result = ledger.withdraw(dec(10));

        assert_eq!(result, Err(BankError::max_withdrawals_reached(3)));
        assert_eq!(ledger.balance(), dec(70));
        assert_eq!(ledger.statement().len(), 4);
        assert_eq!(ledger.withdrawals(), 3);
    }

    #[rstest]
    fn test_balance_check_wins_over_count_check(mut ledger: Ledger) {
        ledger.deposit(dec(30)).unwrap();
        for _ in 0..3 {
            ledger.withdraw(dec(10)).unwrap();
        }

        let result = ledger.withdraw(dec(10));

        assert_eq!(result, Err(BankError::insufficient_funds(dec(0), dec(10))));
    }

    #[rstest]
    fn test_rejected_withdrawal_can_be_retried(mut ledger: Ledger) {
        ledger.deposit(dec(50)).unwrap();

        assert!(ledger.withdraw(dec(60)).is_err());
        assert!(ledger.withdraw(dec(60)).is_err());
        ledger.withdraw(dec(40)).unwrap();

        assert_eq!(ledger.balance(), dec(10));
        assert_eq!(ledger.withdrawals(), 1);
    }

    #[test]
    fn test_zero_max_withdrawals_rejects_everything() {
        let mut ledger = Ledger::new(dec(500), 0);
        ledger.deposit(dec(100)).unwrap();

        assert_eq!(
            ledger.withdraw(dec(1)),
            Err(BankError::max_withdrawals_reached(0))
        );
    }

    #[rstest]
    fn test_render_empty_statement(ledger: Ledger) {
        let output = rendered(&ledger);

        assert_eq!(
            output,
            "\n================ EXTRATO ================\n\
             Não foram realizadas movimentações.\n\
             \n\
             Saldo:\t\tR$ 0.00\n\
             ==========================================\n"
        );
    }

    #[rstest]
    fn test_render_statement_with_movements(mut ledger: Ledger) {
        ledger.deposit(dec(100)).unwrap();
        ledger.withdraw(Decimal::new(5050, 2)).unwrap();

        let output = rendered(&ledger);

        assert_eq!(
            output,
            "\n================ EXTRATO ================\n\
             Depósito:\tR$ 100.00\n\
             Saque:\t\tR$ 50.50\n\
             \n\
             \n\
             Saldo:\t\tR$ 49.50\n\
             ==========================================\n"
        );
    }
}
