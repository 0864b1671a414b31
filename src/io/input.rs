//! Console input validation and currency formatting
//!
//! Amounts typed at the prompt go through [`parse_amount`] before they reach
//! the ledger. Output amounts are always shown with two decimal places.

use crate::types::{Amount, BankError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse user-entered text into a strictly positive amount
///
/// Surrounding whitespace is ignored. Both plain decimal (`12.50`) and
/// scientific (`1e2`) notation are accepted. There is no upper bound.
///
/// # Errors
///
/// Returns `BankError::InvalidAmount` if the text is not a number or the
/// number is zero or negative.
pub fn parse_amount(text: &str) -> Result<Amount, BankError> {
    let trimmed = text.trim();

    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| BankError::invalid_amount(text))?;

    if amount <= Decimal::ZERO {
        return Err(BankError::invalid_amount(text));
    }

    Ok(amount)
}

/// Format an amount as Brazilian reais with two decimal places
pub fn format_currency(amount: Amount) -> String {
    format!("R$ {:.2}", amount.round_dp(2))
}
