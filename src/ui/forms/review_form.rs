//! Review form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FieldId, MAX_FILES, MAX_FILE_SIZE, REVIEW_FIRST_MESSAGE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One vertical slot of the form
enum Row {
    Heading(&'static str),
    Field(FieldId),
    Warning,
    Attachments,
}

/// Rows to draw for the current visibility, top to bottom
fn rows(app: &App) -> Vec<Row> {
    let visibility = app.state.form.visibility();
    let mut rows = vec![
        Row::Heading("1. Organization"),
        Row::Field(FieldId::OrgName),
        Row::Heading("2. Summary review"),
        Row::Field(FieldId::Reviewed),
    ];
    if visibility.warning_visible {
        rows.push(Row::Warning);
    }
    if visibility.section_visible {
        rows.extend([
            Row::Heading("3. Changes"),
            Row::Field(FieldId::Changes),
            Row::Field(FieldId::ChangeType),
            Row::Field(FieldId::Files),
            Row::Attachments,
        ]);
    }
    rows.extend([
        Row::Heading("4. Confirmation"),
        Row::Field(FieldId::Agree),
        Row::Field(FieldId::FullName),
    ]);
    rows
}

/// Draw the form with its conditional sections
pub fn draw_review_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.state.is_action_panel_focused();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Summary Review ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = rows(app);
    let mut constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| match row {
            Row::Heading(_) | Row::Attachments => Constraint::Length(1),
            Row::Warning => Constraint::Length(2),
            Row::Field(id) => Constraint::Length(field_height(app.state.form.field(*id))),
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let active = app.state.active_field();
    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        match row {
            Row::Heading(title) => {
                let heading = Paragraph::new(Span::styled(
                    *title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                frame.render_widget(heading, *chunk);
            }
            Row::Field(id) => {
                draw_field(frame, *chunk, app.state.form.field(*id), active == Some(*id));
            }
            Row::Warning => {
                let warning = Paragraph::new(Span::styled(
                    REVIEW_FIRST_MESSAGE,
                    Style::default().fg(Color::Red),
                ))
                .wrap(Wrap { trim: true });
                frame.render_widget(warning, *chunk);
            }
            Row::Attachments => draw_attachments(frame, *chunk, app),
        }
    }
}

/// One-line summary of the accepted selection
fn draw_attachments(frame: &mut Frame, area: Rect, app: &App) {
    let attachments = &app.state.form.attachments;
    let line = if attachments.is_empty() {
        Line::from(Span::styled(
            format!(
                "No files accepted (max {MAX_FILES}, {}MB each)",
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let names = attachments
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Line::from(vec![
            Span::styled("Accepted: ", Style::default().fg(Color::Green)),
            Span::raw(names),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
