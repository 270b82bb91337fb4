use super::*;

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color(" Dark_Gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("#10a0ff"), Some(Color::Rgb(0x10, 0xA0, 0xFF)));
    assert_eq!(parse_color("reset"), Some(Color::Reset));
}

#[test]
fn parse_color_rejects_garbage() {
    for value in ["", "#123", "#12345g", "chartreuse", "#ééé"] {
        assert_eq!(parse_color(value), None, "{value:?}");
    }
}

#[test]
fn apply_settings_overrides_only_valid_entries() {
    let mut theme = UiTheme::default();
    theme.apply_settings(&ThemeSettings {
        header_fg: None,
        accent_fg: Some("green".to_string()),
        error_fg: Some("not-a-color".to_string()),
        muted_fg: None,
        border: Some("#000000".to_string()),
    });

    assert_eq!(theme.header_fg, UiTheme::default().header_fg);
    assert_eq!(theme.accent_fg, Color::Indexed(2));
    assert_eq!(theme.error_fg, UiTheme::default().error_fg);
    assert_eq!(theme.border, Color::Rgb(0, 0, 0));
}

#[test]
fn truecolor_keeps_rgb() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(1, 2, 3),
        ..Default::default()
    };
    theme.apply_color_support(TerminalColorSupport::TrueColor);
    assert_eq!(theme.accent_fg, Color::Rgb(1, 2, 3));
}

#[test]
fn ansi256_maps_rgb_into_color_cube() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(255, 0, 0),
        border: Color::Rgb(0, 0, 0),
        ..Default::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi256);
    assert_eq!(theme.accent_fg, Color::Indexed(196));
    assert_eq!(theme.border, Color::Indexed(16));
    assert_eq!(theme.error_fg, Color::Indexed(1));
}

#[test]
fn ansi16_maps_rgb_and_high_indexes_to_basic_palette() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(250, 250, 250),
        muted_fg: Color::Indexed(196),
        ..Default::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi16);
    assert_eq!(theme.accent_fg, Color::Indexed(15));
    assert_eq!(theme.muted_fg, Color::Indexed(9));
    assert_eq!(theme.header_fg, Color::Indexed(6));
}
