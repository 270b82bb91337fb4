use super::{button_label, centered_column, render_header};
use crate::app::theme::UiTheme;
use crate::kernel::{format_balance, AppState};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

pub const TITLE: &str = "Virtual Wallet";
const COLUMN_HEIGHT: u16 = 11;

fn row(column: Rect, offset: u16, height: u16) -> Rect {
    let y = column.y.saturating_add(offset).min(column.bottom());
    Rect {
        x: column.x,
        y,
        width: column.width,
        height: height.min(column.bottom() - y),
    }
}

/// Draws the balance screen; returns the terminal cursor position inside the
/// amount field.
pub fn render_wallet(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &UiTheme,
) -> Option<(u16, u16)> {
    let body = render_header(frame, area, TITLE, theme);
    let column = centered_column(body, COLUMN_HEIGHT);
    let muted = Style::default().fg(theme.muted_fg);

    frame.render_widget(
        Paragraph::new("Available balance")
            .alignment(Alignment::Center)
            .style(muted),
        row(column, 0, 1),
    );
    frame.render_widget(
        Paragraph::new(format!("$ {}", format_balance(state.balance())))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD)),
        row(column, 1, 1),
    );

    let field = row(column, 3, 3);
    let block = Block::bordered()
        .title(" Amount to withdraw ")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(field);
    let form = &state.wallet;
    // Keep the cursor visible when the text is wider than the field.
    let scroll = (form.cursor as u16).saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(form.input.as_str())
            .block(block)
            .scroll((0, scroll)),
        field,
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(theme.error_fg)),
            row(column, 6, 1),
        );
    }

    let button_style = if form.can_submit() {
        Style::default()
            .fg(theme.accent_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        muted.add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(button_label("Withdraw"))
            .alignment(Alignment::Center)
            .style(button_style),
        row(column, 8, 1),
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" withdraw   "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .style(muted),
        row(column, 10, 1),
    );

    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    let x = inner.x + (form.cursor as u16 - scroll).min(inner.width - 1);
    Some((x, inner.y))
}

#[cfg(test)]
#[path = "../../tests/unit/views/wallet.rs"]
mod tests;
