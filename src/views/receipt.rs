use super::{button_label, centered_column, render_header};
use crate::app::theme::UiTheme;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const TITLE: &str = "Receipt";

/// Draws the withdrawal confirmation for `amount` (already two decimals).
pub fn render_receipt(frame: &mut Frame, area: Rect, amount: &str, theme: &UiTheme) {
    let body = render_header(frame, area, TITLE, theme);
    let column = centered_column(body, 5);
    let lines = [
        (
            "Withdrawal successful".to_string(),
            Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
        ),
        (String::new(), Style::default()),
        (format!("Amount withdrawn: $ {amount}"), Style::default()),
        (String::new(), Style::default()),
        (
            button_label("Back to wallet"),
            Style::default().fg(theme.border).add_modifier(Modifier::BOLD),
        ),
    ];

    for (offset, (text, style)) in lines.into_iter().enumerate() {
        let y = column.y + offset as u16;
        if y >= column.bottom() {
            break;
        }
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).style(style),
            Rect {
                y,
                height: 1,
                ..column
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/receipt.rs"]
mod tests;
