//! Service ports: data contracts.

pub mod settings;

pub use settings::{Settings, ThemeSettings};
