//! Withdrawal flow: raw input -> parsed amount -> ledger -> next screen.

use rust_decimal::Decimal;

use super::amount::{format_amount, parse_amount, ParseAmountError};
use super::ledger::{Ledger, WithdrawalError};

/// Why an attempt stayed on the wallet screen. `Display` is the message shown
/// under the amount field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Parse(#[from] ParseAmountError),
    #[error(transparent)]
    Withdrawal(#[from] WithdrawalError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    StayOnWallet {
        error: FlowError,
    },
    NavigateToReceipt {
        /// Withdrawn amount, two decimals.
        amount: String,
        withdrawn: Decimal,
    },
}

impl FlowResult {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowResult::NavigateToReceipt { .. })
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            FlowResult::StayOnWallet { error } => Some(error.to_string()),
            FlowResult::NavigateToReceipt { .. } => None,
        }
    }
}

/// Runs one withdrawal attempt against `ledger`.
///
/// Unparseable text never reaches the ledger; a rejected attempt leaves the
/// balance untouched.
pub fn attempt_withdrawal(ledger: &mut Ledger, raw: &str) -> FlowResult {
    match try_withdraw(ledger, raw) {
        Ok(withdrawn) => FlowResult::NavigateToReceipt {
            amount: format_amount(withdrawn),
            withdrawn,
        },
        Err(error) => FlowResult::StayOnWallet { error },
    }
}

fn try_withdraw(ledger: &mut Ledger, raw: &str) -> Result<Decimal, FlowError> {
    let amount = parse_amount(raw)?;
    ledger.withdraw(amount)?;
    Ok(amount)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/flow.rs"]
mod tests;
