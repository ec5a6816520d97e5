//! Preview dialog shown before submitting

use super::base::{render_dialog, DialogBody, DialogConfig};
use crate::platform::COPY_SHORTCUT;
use crate::state::{sanitize_for_terminal, PreviewTable};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Build the label/value lines for a preview table
fn preview_lines(table: &PreviewTable) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for row in &table.rows {
        let label = Span::styled(format!("{}: ", row.label), label_style);
        match &row.value {
            None => lines.push(Line::from(vec![
                label,
                Span::styled(
                    row.display_value().to_string(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            ])),
            Some(value) => {
                let clean = sanitize_for_terminal(value);
                let mut parts = clean.split('\n');
                let first = parts.next().unwrap_or_default().to_string();
                lines.push(Line::from(vec![label, Span::raw(first)]));
                for rest in parts {
                    lines.push(Line::from(format!("  {rest}")));
                }
            }
        }
    }
    lines
}

/// Render the preview of the pending submission
pub fn render_preview_dialog(frame: &mut Frame, table: &PreviewTable) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(Color::DarkGray);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::styled(" submit  ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(" edit  ", hint_style),
        Span::styled(COPY_SHORTCUT, key_style),
        Span::styled(" copy HTML", hint_style),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Preview",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            body: DialogBody::Lines(preview_lines(table)),
            hint: Some(hint),
            max_width: 76,
        },
    );
}
