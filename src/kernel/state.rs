use rust_decimal::Decimal;

use super::ledger::Ledger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Wallet,
    Receipt {
        /// Two-decimal amount handed over by the withdrawal flow.
        amount: String,
    },
}

/// Back stack of screens on top of a fixed `Route::Wallet` root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    root: Route,
    pushed: Vec<Route>,
}

impl NavStack {
    pub fn new() -> Self {
        Self {
            root: Route::Wallet,
            pushed: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        self.pushed.last().unwrap_or(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    pub fn push(&mut self, route: Route) {
        self.pushed.push(route);
    }

    /// Returns false when already at the root.
    pub fn pop(&mut self) -> bool {
        self.pushed.pop().is_some()
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line amount field on the wallet screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletForm {
    pub input: String,
    /// Cursor position in chars.
    pub cursor: usize,
    pub error: Option<String>,
}

impl WalletForm {
    /// Mirrors the withdraw button's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
        if text.is_empty() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.input.insert_str(at, &text);
        self.cursor += text.chars().count();
        self.error = None;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.input.remove(at);
        self.cursor -= 1;
        self.error = None;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        self.error = None;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.input.is_empty() && self.error.is_none() {
            return false;
        }
        self.input.clear();
        self.cursor = 0;
        self.error = None;
        true
    }

    pub fn move_cursor(&mut self, delta: isize) -> bool {
        let len = self.char_len() as isize;
        let next = (self.cursor as isize + delta).clamp(0, len) as usize;
        let changed = next != self.cursor;
        self.cursor = next;
        changed
    }

    pub fn cursor_home(&mut self) -> bool {
        let changed = self.cursor != 0;
        self.cursor = 0;
        changed
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.char_len();
        let changed = self.cursor != end;
        self.cursor = end;
        changed
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub ledger: Ledger,
    pub nav: NavStack,
    pub wallet: WalletForm,
}

impl AppState {
    pub fn new(initial_balance: Decimal) -> Self {
        Self {
            ledger: Ledger::new(initial_balance),
            nav: NavStack::new(),
            wallet: WalletForm::default(),
        }
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn balance(&self) -> Decimal {
        self.ledger.balance()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Ledger::default_balance())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
