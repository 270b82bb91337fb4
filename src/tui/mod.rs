//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the wallet core builds without terminal crates.

pub mod terminal_guard;
pub mod view;
