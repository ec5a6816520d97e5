//! Layout components (main area, action panel, status bar)

use super::components::{render_action_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, PREVIEW_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ActionButton, FieldId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into form, action panel and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the action panel with its buttons
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_action_panel_focused();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Preview
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    let submitting = app.state.flow.is_submitting();
    for (idx, button) in ActionButton::ALL.iter().enumerate() {
        let (accent, enabled) = match button {
            ActionButton::Preview => (Color::White, !submitting),
            ActionButton::Submit => (Color::Green, !submitting),
            ActionButton::Quit => (Color::Gray, true),
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            is_focused && app.state.selected_action() == *button,
            enabled,
            Some(accent),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Endpoint status
    let endpoint_status = if app.endpoint_configured() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ local ", Style::default().fg(Color::Yellow))
    };
    spans.push(endpoint_status);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);

    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::Black).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has focus
fn get_hints(app: &App) -> String {
    if app.state.has_errors() {
        return "Enter/Esc:dismiss".to_string();
    }
    if app.state.flow.preview().is_some() {
        return format!("Enter:submit  Esc:edit  {COPY_SHORTCUT}:copy HTML");
    }
    let shortcuts = format!("{PREVIEW_SHORTCUT}:preview  {SUBMIT_SHORTCUT}:submit");
    match app.state.active_field() {
        None => format!("j/k:select  Enter:run  Tab:form  {shortcuts}"),
        Some(FieldId::Reviewed) => format!("y/n or ←/→:answer  Tab:next  {shortcuts}"),
        Some(FieldId::Agree) => format!("Space:toggle  Tab:next  {shortcuts}"),
        Some(id) if app.state.form.field(id).is_multiline => {
            format!("Enter:newline  Tab:next  {shortcuts}")
        }
        Some(_) => format!("Tab:next  S-Tab:prev  {shortcuts}"),
    }
}
