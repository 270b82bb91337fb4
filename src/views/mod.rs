//! Screen renderers. Each takes read-only kernel state and draws one route.

pub mod receipt;
pub mod wallet;

pub use receipt::render_receipt;
pub use wallet::render_wallet;

use crate::app::theme::UiTheme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const COLUMN_WIDTH: u16 = 44;

/// Title row at the top of `area`; returns the remaining body.
pub(crate) fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &UiTheme) -> Rect {
    if area.height == 0 {
        return area;
    }
    let header = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(title.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD)),
        header,
    );
    Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    }
}

/// Centers a `COLUMN_WIDTH` x `height` box in `area`, shrinking to fit.
pub(crate) fn centered_column(area: Rect, height: u16) -> Rect {
    let width = COLUMN_WIDTH.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub(crate) fn button_label(label: &str) -> String {
    format!("[ {label} ]")
}
