//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod status_panel;

use crate::app::App;
use crate::state::PreviewTable;
use components::{render_error_dialog, render_preview_dialog};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, action_area, status_bar_area) = layout::create_layout(frame.area());

    // Result panel sits under the form when there is something to report
    match app.state.status() {
        Some(status) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(status_panel::panel_height(&status)),
                ])
                .split(form_area);
            forms::draw_review_form(frame, chunks[0], app);
            status_panel::draw_status_panel(frame, chunks[1], &status);
        }
        None => forms::draw_review_form(frame, form_area, app),
    }

    layout::draw_action_panel(frame, action_area, app);
    layout::draw_status_bar(frame, status_bar_area, app);

    // Modal overlays, errors on top
    if let Some(payload) = app.state.flow.preview() {
        render_preview_dialog(frame, &PreviewTable::from_payload(payload));
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_count() - 1);
    }
}
