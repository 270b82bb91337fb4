use super::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn new_store(balance: &str) -> Store {
    Store::new(AppState::new(dec(balance)))
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::InputInsert(ch));
    }
}

#[test]
fn successful_submit_pushes_receipt_and_resets_form() {
    let mut store = new_store("10000.00");
    type_text(&mut store, "500");

    let result = store.dispatch(Action::Submit);
    assert!(result.state_changed);
    assert!(result.effects.is_empty());

    let state = store.state();
    assert_eq!(state.balance(), dec("9500.00"));
    assert_eq!(
        state.route(),
        &Route::Receipt {
            amount: "500.00".to_string()
        }
    );
    assert!(state.wallet.input.is_empty());
    assert_eq!(state.wallet.cursor, 0);
    assert_eq!(state.wallet.error, None);
}

#[test]
fn rejected_submit_keeps_input_and_sets_error() {
    let mut store = new_store("100.00");
    type_text(&mut store, "150");
    store.dispatch(Action::Submit);

    let state = store.state();
    assert_eq!(state.route(), &Route::Wallet);
    assert_eq!(state.balance(), dec("100.00"));
    assert_eq!(state.wallet.input, "150");
    assert_eq!(state.wallet.error.as_deref(), Some("insufficient balance"));
}

#[test]
fn error_messages_per_failure_kind() {
    let cases = [
        ("abc", "invalid number"),
        ("", "invalid number"),
        ("0", "amount must be greater than 0"),
        ("-3", "amount must be greater than 0"),
        ("100.5", "insufficient balance"),
    ];
    for (input, message) in cases {
        let mut store = new_store("100.00");
        type_text(&mut store, input);
        store.dispatch(Action::Submit);
        assert_eq!(store.state().wallet.error.as_deref(), Some(message), "{input:?}");
        assert_eq!(store.state().balance(), dec("100.00"));
    }
}

#[test]
fn success_clears_previous_error() {
    let mut store = new_store("100.00");
    type_text(&mut store, "abc");
    store.dispatch(Action::Submit);
    assert!(store.state().wallet.error.is_some());

    store.dispatch(Action::InputClear);
    type_text(&mut store, "100");
    store.dispatch(Action::Submit);
    assert_eq!(store.state().wallet.error, None);
    assert_eq!(store.state().balance(), Decimal::ZERO);
}

#[test]
fn back_from_receipt_returns_to_wallet_without_touching_ledger() {
    let mut store = new_store("100.00");
    type_text(&mut store, "40");
    store.dispatch(Action::Submit);

    let result = store.dispatch(Action::Back);
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().route(), &Route::Wallet);
    assert_eq!(store.state().balance(), dec("60.00"));
}

#[test]
fn back_on_wallet_requests_quit() {
    let mut store = new_store("100.00");
    let result = store.dispatch(Action::Back);
    assert!(!result.state_changed);
    assert_eq!(result.effects, vec![Effect::Quit]);
}

#[test]
fn input_and_submit_are_ignored_on_receipt() {
    let mut store = new_store("100.00");
    type_text(&mut store, "10");
    store.dispatch(Action::Submit);

    assert!(!store.dispatch(Action::InputInsert('5')).state_changed);
    assert!(!store.dispatch(Action::Submit).state_changed);
    assert!(store.state().wallet.input.is_empty());
    assert_eq!(store.state().balance(), dec("90.00"));
}

#[test]
fn paste_inserts_at_cursor() {
    let mut store = new_store("100.00");
    type_text(&mut store, "15");
    store.dispatch(Action::InputCursorLeft);
    store.dispatch(Action::InputPaste("2,".to_string()));
    assert_eq!(store.state().wallet.input, "12,5");
}

#[test]
fn quit_and_reload_are_effects() {
    let mut store = new_store("100.00");
    assert_eq!(store.dispatch(Action::Quit).effects, vec![Effect::Quit]);
    assert_eq!(
        store.dispatch(Action::ReloadSettings).effects,
        vec![Effect::ReloadSettings]
    );
}
