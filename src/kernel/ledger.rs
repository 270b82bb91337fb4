use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawalError {
    #[error("amount must be greater than 0")]
    NonPositiveAmount,
    #[error("insufficient balance")]
    InsufficientFunds,
}

/// Owns the wallet balance. The balance never goes negative and only moves
/// through [`Ledger::withdraw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Decimal,
}

impl Ledger {
    /// 10,000.00
    pub fn default_balance() -> Decimal {
        Decimal::new(1_000_000, 2)
    }

    /// Negative starting balances are clamped to zero.
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance: balance.max(Decimal::ZERO),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), WithdrawalError> {
        if amount <= Decimal::ZERO {
            return Err(WithdrawalError::NonPositiveAmount);
        }
        if amount > self.balance {
            return Err(WithdrawalError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Self::default_balance())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/ledger.rs"]
mod tests;
