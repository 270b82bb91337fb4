//! Headless application core (state/action/effect).

pub mod action;
pub mod amount;
pub mod effect;
pub mod flow;
pub mod ledger;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use amount::{format_amount, format_balance, parse_amount, ParseAmountError};
pub use effect::Effect;
pub use flow::{attempt_withdrawal, FlowError, FlowResult};
pub use ledger::{Ledger, WithdrawalError};
pub use state::{AppState, NavStack, Route, WalletForm};
pub use store::{DispatchResult, Store};
