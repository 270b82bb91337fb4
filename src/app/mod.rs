//! Application layer: routes input to the kernel store and draws the current screen.

pub mod input;
pub mod theme;

use crate::core::event::InputEvent;
use crate::kernel::services::adapters::load_settings_from;
use crate::kernel::services::ports::Settings;
use crate::kernel::{format_amount, Action, AppState, Effect, Route, Store};
use crate::tui::view::{EventResult, View};
use crate::views::{render_receipt, render_wallet};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::PathBuf;
use theme::UiTheme;

pub struct App {
    store: Store,
    theme: UiTheme,
    settings_path: Option<PathBuf>,
    cursor: Option<(u16, u16)>,
}

impl App {
    pub fn new(settings: &Settings, settings_path: Option<PathBuf>) -> Self {
        let state = AppState::new(settings.initial_balance());
        tracing::info!(balance = %format_amount(state.balance()), "wallet opened");
        Self {
            store: Store::new(state),
            theme: UiTheme::from_settings(&settings.theme),
            settings_path,
            cursor: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        let mut outcome = if result.state_changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        };

        for effect in result.effects {
            match effect {
                Effect::Quit => return EventResult::Quit,
                Effect::ReloadSettings => {
                    if self.reload_settings() {
                        outcome = EventResult::Consumed;
                    }
                }
            }
        }
        outcome
    }

    /// Re-reads the theme; the balance is never reset by a reload.
    fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.as_deref() else {
            tracing::debug!("no settings file to reload");
            return false;
        };
        let Some(settings) = load_settings_from(path) else {
            return false;
        };

        let theme = UiTheme::from_settings(&settings.theme);
        let changed = theme != self.theme;
        self.theme = theme;
        tracing::info!(path = %path.display(), changed, "settings reloaded");
        changed
    }
}

impl View for App {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(_) => {
                let Some(key) = event.as_key_press() else {
                    return EventResult::Ignored;
                };
                match input::action_for_key(self.store.state().route(), key) {
                    Some(action) => self.dispatch(action),
                    None => EventResult::Ignored,
                }
            }
            InputEvent::Paste(text) => self.dispatch(Action::InputPaste(text.clone())),
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::Other => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        self.cursor = match state.route() {
            Route::Wallet => render_wallet(frame, area, state, &self.theme),
            Route::Receipt { amount } => {
                render_receipt(frame, area, amount, &self.theme);
                None
            }
        };
        if let Some(position) = self.cursor {
            frame.set_cursor_position(position);
        }
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/app.rs"]
mod tests;
