//! Inline submission result under the form

use crate::platform::COPY_SHORTCUT;
use crate::state::{sanitize_for_terminal, StatusKind, StatusMessage};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Tallest the panel is allowed to grow
const MAX_HEIGHT: u16 = 14;

/// Rows the panel wants for `status`, borders included
pub fn panel_height(status: &StatusMessage) -> u16 {
    let body = if status.body.is_empty() {
        0
    } else {
        status.body.lines().count() as u16
    };
    let footer = u16::from(status.footer.is_some());
    (2 + 1 + body + footer).min(MAX_HEIGHT)
}

pub fn draw_status_panel(frame: &mut Frame, area: Rect, status: &StatusMessage) {
    let color = match status.kind {
        StatusKind::Info => Color::Yellow,
        StatusKind::Success => Color::Green,
        StatusKind::Error => Color::Red,
    };

    let mut lines = vec![Line::from(Span::styled(
        status.title.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        sanitize_for_terminal(&status.body)
            .lines()
            .map(|l| Line::from(l.to_string())),
    );
    if let Some(footer) = &status.footer {
        lines.push(Line::from(Span::styled(
            format!("{footer} ({COPY_SHORTCUT} copies the JSON)"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
