use super::*;
use tempfile::tempdir;

#[test]
fn write_default_settings_creates_file_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.initial_balance, "10000.00");

    std::fs::write(&path, r#"{"initial_balance": "42.00"}"#).unwrap();
    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.initial_balance, "42.00");
}

#[test]
fn load_settings_from_rejects_bad_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}

#[test]
fn load_settings_from_missing_file_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_settings_from(&dir.path().join("absent.json")).is_none());
}

#[test]
fn settings_path_lives_under_app_folder() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".walletui/settings.json"));
    }
}
