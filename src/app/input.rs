use crate::core::event::Key;
use crate::kernel::{Action, Route};
use crossterm::event::{KeyCode, KeyEvent};

/// Maps a key press to a kernel action for the screen currently shown.
pub fn action_for_key(route: &Route, event: &KeyEvent) -> Option<Action> {
    let key = Key::from(*event);

    if key == Key::ctrl(KeyCode::Char('c')) || key == Key::ctrl(KeyCode::Char('q')) {
        return Some(Action::Quit);
    }
    if key == Key::ctrl(KeyCode::Char('r')) {
        return Some(Action::ReloadSettings);
    }

    match route {
        Route::Receipt { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
        Route::Wallet => {
            if key == Key::ctrl(KeyCode::Char('u')) {
                return Some(Action::InputClear);
            }
            if let Some(ch) = Key::typed_char(event) {
                return Some(Action::InputInsert(ch));
            }
            let action = match key.code {
                KeyCode::Enter => Action::Submit,
                KeyCode::Esc => Action::Back,
                KeyCode::Backspace => Action::InputBackspace,
                KeyCode::Delete => Action::InputDelete,
                KeyCode::Left => Action::InputCursorLeft,
                KeyCode::Right => Action::InputCursorRight,
                KeyCode::Home => Action::InputCursorHome,
                KeyCode::End => Action::InputCursorEnd,
                _ => return None,
            };
            Some(action)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
