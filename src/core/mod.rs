//! Frontend-facing input types shared by the TUI layer.

pub mod event;

pub use event::{InputEvent, Key};
