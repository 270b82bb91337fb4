use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::kernel::amount::{format_amount, parse_amount};
use crate::kernel::Ledger;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Decimal string; `,` is accepted as the fractional separator.
    #[serde(default = "default_initial_balance")]
    pub initial_balance: String,
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_initial_balance() -> String {
    format_amount(Ledger::default_balance())
}

impl Settings {
    /// Starting balance; unparseable or negative values fall back to the default.
    pub fn initial_balance(&self) -> Decimal {
        match parse_amount(&self.initial_balance) {
            Ok(balance) if balance >= Decimal::ZERO => balance,
            Ok(_) | Err(_) => {
                tracing::warn!(
                    value = %self.initial_balance,
                    "invalid initial_balance in settings, using default"
                );
                Ledger::default_balance()
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            theme: ThemeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            header_fg: Some("cyan".to_string()),
            accent_fg: Some("yellow".to_string()),
            error_fg: Some("red".to_string()),
            muted_fg: Some("dark_gray".to_string()),
            border: Some("cyan".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
