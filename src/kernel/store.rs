use super::flow::{attempt_withdrawal, FlowResult};
use super::{Action, AppState, Effect, Route};
use crate::kernel::amount::format_amount;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Quit => DispatchResult::effect(Effect::Quit),
            Action::ReloadSettings => DispatchResult::effect(Effect::ReloadSettings),
            Action::Back => self.back(),
            Action::Submit => self.submit(),
            edit => {
                if *self.state.route() != Route::Wallet {
                    return DispatchResult::changed(false);
                }
                let form = &mut self.state.wallet;
                let changed = match edit {
                    Action::InputInsert(ch) => form.insert_str(ch.encode_utf8(&mut [0u8; 4])),
                    Action::InputPaste(text) => form.insert_str(&text),
                    Action::InputBackspace => form.backspace(),
                    Action::InputDelete => form.delete(),
                    Action::InputClear => form.clear(),
                    Action::InputCursorLeft => form.move_cursor(-1),
                    Action::InputCursorRight => form.move_cursor(1),
                    Action::InputCursorHome => form.cursor_home(),
                    Action::InputCursorEnd => form.cursor_end(),
                    Action::Quit | Action::ReloadSettings | Action::Back | Action::Submit => false,
                };
                DispatchResult::changed(changed)
            }
        }
    }

    fn back(&mut self) -> DispatchResult {
        if self.state.nav.pop() {
            tracing::info!(route = ?self.state.route(), "navigated back");
            return DispatchResult::changed(true);
        }
        DispatchResult::effect(Effect::Quit)
    }

    fn submit(&mut self) -> DispatchResult {
        if *self.state.route() != Route::Wallet {
            return DispatchResult::changed(false);
        }

        let result = attempt_withdrawal(&mut self.state.ledger, &self.state.wallet.input);
        match result {
            FlowResult::NavigateToReceipt { amount, withdrawn } => {
                tracing::info!(
                    amount = %format_amount(withdrawn),
                    balance = %format_amount(self.state.ledger.balance()),
                    "withdrawal accepted"
                );
                let form = &mut self.state.wallet;
                form.input.clear();
                form.cursor = 0;
                form.error = None;
                self.state.nav.push(Route::Receipt { amount });
            }
            FlowResult::StayOnWallet { error } => {
                tracing::debug!(input = %self.state.wallet.input, error = %error, "withdrawal rejected");
                self.state.wallet.error = Some(error.to_string());
            }
        }
        DispatchResult::changed(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
