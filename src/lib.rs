//! walletui - a two-screen terminal wallet.
//!
//! Module layout:
//! - kernel: headless core (ledger, withdrawal flow, store, settings)
//! - core: input event types (tui)
//! - tui: terminal lifecycle and the view contract (tui)
//! - views: wallet and receipt screens (tui)
//! - app: input routing, theme, effect handling (tui)

pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
