//! Application state definitions

use super::flow::{SubmissionFlow, SubmissionPhase, SubmitOutcome};
use super::forms::{FieldId, FieldValue, Focus, ReviewForm, Reviewed};
use std::collections::VecDeque;

/// Tone of the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Inline result shown under the form after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub title: String,
    pub body: String,
    pub footer: Option<String>,
}

impl StatusMessage {
    /// Status panel contents for a flow phase; `None` hides the panel
    pub fn for_phase(phase: &SubmissionPhase) -> Option<Self> {
        match phase {
            SubmissionPhase::Idle
            | SubmissionPhase::Reviewing(_)
            | SubmissionPhase::Previewing(_) => None,
            SubmissionPhase::Submitting => Some(Self {
                kind: StatusKind::Info,
                title: "Submitting...".to_string(),
                body: String::new(),
                footer: None,
            }),
            SubmissionPhase::Succeeded(SubmitOutcome::Local(payload)) => Some(Self {
                kind: StatusKind::Info,
                title: "No endpoint configured.".to_string(),
                body: format!("Preview data:\n{}", payload.to_pretty_json()),
                footer: Some(
                    "Provide a backend submission endpoint to enable real submissions."
                        .to_string(),
                ),
            }),
            SubmissionPhase::Succeeded(SubmitOutcome::Remote(reply)) => Some(Self {
                kind: StatusKind::Success,
                title: "Submitted successfully.".to_string(),
                body: reply.to_string(),
                footer: None,
            }),
            SubmissionPhase::Failed(err) => Some(Self {
                kind: StatusKind::Error,
                title: "Submission error:".to_string(),
                body: err.to_string(),
                footer: None,
            }),
        }
    }
}

/// Buttons on the action panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Preview,
    Submit,
    Quit,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [
        ActionButton::Preview,
        ActionButton::Submit,
        ActionButton::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Submit => "Submit",
            Self::Quit => "Quit",
        }
    }
}

/// Everything the handlers and renderers share
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ReviewForm,
    pub focus: Focus,
    /// Index into [`ActionButton::ALL`] while the action panel is focused
    pub selected_button: usize,
    pub flow: SubmissionFlow,
    /// Messages waiting to be acknowledged, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    /// Queue a message for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message currently shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// What the status panel should show right now
    pub fn status(&self) -> Option<StatusMessage> {
        StatusMessage::for_phase(self.flow.phase())
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.focus == Focus::Actions
    }

    pub fn selected_action(&self) -> ActionButton {
        ActionButton::ALL[self.selected_button.min(ActionButton::ALL.len() - 1)]
    }

    /// Focus the action panel with `button` selected
    pub fn focus_action(&mut self, button: ActionButton) {
        self.focus = Focus::Actions;
        self.selected_button = ActionButton::ALL
            .iter()
            .position(|b| *b == button)
            .unwrap_or(0);
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % ActionButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = ActionButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Field under the cursor, if a field has focus
    pub fn active_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(id) => Some(id),
            Focus::Actions => None,
        }
    }

    /// Move focus to a field, falling back to the nearest visible one
    pub fn focus_field(&mut self, id: FieldId) {
        self.focus = self.form.nearest_visible(Focus::Field(id));
    }

    pub fn next_form_field(&mut self) {
        self.focus = self.form.next_focus(self.focus);
    }

    pub fn prev_form_field(&mut self) {
        self.focus = self.form.prev_focus(self.focus);
    }

    /// Handle character input in the focused field
    pub fn form_input_char(&mut self, c: char) {
        let Some(id) = self.active_field() else {
            return;
        };
        let value = self.form.field(id).value.clone();
        match value {
            FieldValue::Text(_) => self.form.field_mut(id).push_char(c),
            FieldValue::Choice(_) => match c {
                'y' | 'Y' => self.select_reviewed(Reviewed::Yes),
                'n' | 'N' => self.select_reviewed(Reviewed::No),
                _ => {}
            },
            FieldValue::Flag(_) => {
                if c == ' ' || c == 'x' {
                    self.form.field_mut(id).toggle();
                }
            }
        }
    }

    /// Handle backspace in the focused field
    pub fn form_backspace(&mut self) {
        if let Some(id) = self.active_field() {
            self.form.field_mut(id).pop_char();
        }
    }

    /// Enter inside a multi-line field
    pub fn form_newline(&mut self) {
        if let Some(id) = self.active_field() {
            if self.form.field(id).is_multiline {
                self.form.field_mut(id).push_char('\n');
            }
        }
    }

    /// Change the yes/no answer and re-derive visibility
    pub fn select_reviewed(&mut self, choice: Reviewed) {
        if self.form.reviewed() == choice {
            return;
        }
        self.form.set_reviewed(choice);
        self.flow.on_selection_change(choice);
        let visibility = self.form.visibility();
        tracing::debug!(
            reviewed = choice.as_str(),
            warning = visibility.warning_visible,
            section = visibility.section_visible,
            "Selection changed"
        );
        self.focus = self.form.nearest_visible(self.focus);
    }

    /// Clear every field after a successful submission
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.focus = Focus::default();
        self.selected_button = 0;
        self.flow.on_selection_change(self.form.reviewed());
    }
}
