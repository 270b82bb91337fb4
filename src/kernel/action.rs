#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InputInsert(char),
    InputPaste(String),
    InputBackspace,
    InputDelete,
    InputClear,
    InputCursorLeft,
    InputCursorRight,
    InputCursorHome,
    InputCursorEnd,
    /// Withdraw button / "done" key on the wallet screen.
    Submit,
    /// Pops the current screen; at the root this asks the frontend to exit.
    Back,
    ReloadSettings,
    Quit,
}
