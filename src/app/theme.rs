//! Screen colours, overridable from the `theme` block of the settings file.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub header_fg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
    pub border: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("WALLETUI_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            header_fg: Color::Indexed(6), // Cyan
            accent_fg: Color::Indexed(3), // Yellow
            error_fg: Color::Indexed(1),  // Red
            muted_fg: Color::Indexed(8),  // DarkGray
            border: Color::Indexed(6),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme.adapt_to_terminal_capabilities();
        theme
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots = [
            (&mut self.header_fg, &settings.header_fg),
            (&mut self.accent_fg, &settings.accent_fg),
            (&mut self.error_fg, &settings.error_fg),
            (&mut self.muted_fg, &settings.muted_fg),
            (&mut self.border, &settings.border),
        ];
        for (slot, value) in slots {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        for slot in [
            &mut self.header_fg,
            &mut self.accent_fg,
            &mut self.error_fg,
            &mut self.muted_fg,
            &mut self.border,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };
    Some(c)
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_cube(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(nearest_ansi16(r, g, b))
        }
        (_, other) => other,
    }
}

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

fn cube_level(v: u8) -> u8 {
    let mut best = 0u8;
    for (i, level) in CUBE_LEVELS.iter().enumerate() {
        if v.abs_diff(*level) < v.abs_diff(CUBE_LEVELS[best as usize]) {
            best = i as u8;
        }
    }
    best
}

fn rgb_to_ansi256_cube(r: u8, g: u8, b: u8) -> u8 {
    16 + 36 * cube_level(r) + 6 * cube_level(g) + cube_level(b)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }
    if index <= 231 {
        let offset = index - 16;
        return (
            CUBE_LEVELS[(offset / 36) as usize],
            CUBE_LEVELS[((offset / 6) % 6) as usize],
            CUBE_LEVELS[(offset % 6) as usize],
        );
    }
    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let distance = |(pr, pg, pb): (u8, u8, u8)| {
        let dr = i32::from(r) - i32::from(pr);
        let dg = i32::from(g) - i32::from(pg);
        let db = i32::from(b) - i32::from(pb);
        dr * dr + dg * dg + db * db
    };
    ANSI16_RGB
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|(_, rgb)| distance(*rgb))
        .map(|(i, _)| i as u8)
        .unwrap_or(15)
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
