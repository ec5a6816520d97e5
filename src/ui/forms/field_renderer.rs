//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs including its border
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        5
    } else {
        3
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let is_text = matches!(field.value, FieldValue::Text(_));
    let display_str = if is_text && display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    // Choices and checkboxes don't take free text
    let cursor = if is_active && is_text { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        // Keep the cursor line in view
        let inner_height = field_height(field).saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(inner_height) as u16;
        Paragraph::new(lines).scroll((scroll, 0))
    } else {
        let value_style = if is_text {
            style
        } else if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
