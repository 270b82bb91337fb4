use super::*;

#[test]
fn nav_stack_starts_on_wallet_and_never_pops_root() {
    let mut nav = NavStack::new();
    assert_eq!(nav.current(), &Route::Wallet);
    assert!(!nav.pop());
    assert_eq!(nav.depth(), 1);

    nav.push(Route::Receipt {
        amount: "1.00".to_string(),
    });
    assert!(matches!(nav.current(), Route::Receipt { .. }));
    assert!(nav.pop());
    assert_eq!(nav.current(), &Route::Wallet);
}

#[test]
fn form_edits_track_cursor() {
    let mut form = WalletForm::default();
    assert!(form.insert_str("150"));
    assert_eq!(form.cursor, 3);

    assert!(form.move_cursor(-1));
    assert!(form.insert_str(","));
    assert_eq!(form.input, "15,0");
    assert_eq!(form.cursor, 3);

    assert!(form.backspace());
    assert_eq!(form.input, "150");
    assert!(form.delete());
    assert_eq!(form.input, "15");
    assert!(!form.delete());

    assert!(form.cursor_home());
    assert!(!form.backspace());
    assert!(form.cursor_end());
    assert_eq!(form.cursor, 2);
    assert!(!form.move_cursor(5));
}

#[test]
fn form_edits_clear_error() {
    let mut form = WalletForm {
        error: Some("invalid number".to_string()),
        ..Default::default()
    };
    form.insert_str("1");
    assert_eq!(form.error, None);

    form.error = Some("insufficient balance".to_string());
    form.backspace();
    assert_eq!(form.error, None);
}

#[test]
fn control_characters_are_not_inserted() {
    let mut form = WalletForm::default();
    assert!(!form.insert_str("\n\t"));
    assert!(form.insert_str("1\n2"));
    assert_eq!(form.input, "12");
}

#[test]
fn multibyte_input_is_edited_by_char() {
    let mut form = WalletForm::default();
    form.insert_str("1€2");
    assert_eq!(form.cursor, 3);
    form.move_cursor(-1);
    assert!(form.backspace());
    assert_eq!(form.input, "12");
}

#[test]
fn can_submit_requires_non_blank_input() {
    let mut form = WalletForm::default();
    assert!(!form.can_submit());
    form.insert_str("   ");
    assert!(!form.can_submit());
    form.insert_str("5");
    assert!(form.can_submit());
}

#[test]
fn app_state_defaults() {
    let state = AppState::default();
    assert_eq!(state.balance(), Ledger::default_balance());
    assert_eq!(state.route(), &Route::Wallet);
    assert!(state.wallet.input.is_empty());
}
