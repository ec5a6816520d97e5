//! Application state and core logic

use crate::config::FormConfig;
use crate::endpoint::{EndpointClient, ServerReply, SubmitEndpoint};
use crate::error::{AttachmentError, FormError, TransportError, ValidationError};
use crate::state::{
    gate_selection, parse_selection, validate_form, ActionButton, AppState, BlockReason,
    DiskProbe, FieldId, FileProbe, PreviewTable, Reviewed, SubmissionPayload, SubmissionPhase,
    SubmitDecision, SubmitOutcome,
};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type SubmissionResult = std::result::Result<ServerReply, TransportError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submissions go; `None` keeps them local
    endpoint: Option<Arc<dyn SubmitEndpoint>>,
    /// File metadata source for the attachment gatekeeper
    probe: Box<dyn FileProbe + Send>,
    /// Result of the in-flight submission, if one was dispatched
    pending: Option<oneshot::Receiver<SubmissionResult>>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create an App that reads attachments from disk
    pub fn new(endpoint: Option<Arc<dyn SubmitEndpoint>>) -> Self {
        Self::with_probe(endpoint, Box::new(DiskProbe))
    }

    pub fn with_probe(
        endpoint: Option<Arc<dyn SubmitEndpoint>>,
        probe: Box<dyn FileProbe + Send>,
    ) -> Self {
        let mut state = AppState::default();
        // Derive the initial branch with nothing selected
        state.flow.on_selection_change(state.form.reviewed());

        Self {
            state,
            endpoint,
            probe,
            pending: None,
            quit: false,
            copy_message: None,
        }
    }

    /// Create an App wired to the configured endpoint
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let endpoint: Option<Arc<dyn SubmitEndpoint>> = match config.endpoint() {
            Some(url) => {
                let client = EndpointClient::new(url)?;
                tracing::info!(endpoint = %client.url(), "Submissions will be posted");
                Some(Arc::new(client))
            }
            None => {
                tracing::info!("No endpoint configured; submissions stay local");
                None
            }
        };
        Ok(Self::new(endpoint))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn endpoint_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Log a recoverable error at the level its kind deserves
    fn log_error(err: &FormError) {
        match err {
            FormError::Validation(e) => tracing::debug!("Validation failed: {e}"),
            FormError::Attachment(AttachmentError::TooLarge { name, size }) => {
                tracing::warn!(%name, size, "File selection rejected: file too large")
            }
            FormError::Attachment(e) => tracing::warn!("File selection rejected: {e}"),
            FormError::Transport(e) => tracing::warn!("Submission failed: {e}"),
        }
    }

    /// Log and display a recoverable error
    fn surface(&mut self, err: FormError) {
        Self::log_error(&err);
        self.push_error(err.to_string());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if key.code == KeyCode::Char('y') && key.modifiers.contains(crate::platform::COPY_MODIFIER)
        {
            return self.copy_current();
        }

        // Handle preview dialog (modal)
        if self.state.flow.preview().is_some() {
            match key.code {
                KeyCode::Enter => self.confirm_preview(),
                KeyCode::Esc | KeyCode::Char('e') => self.edit_preview(),
                _ => {}
            }
            return Ok(());
        }

        let on_action_panel = self.state.is_action_panel_focused();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('p') if ctrl => self.preview(),
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            // Up/Down for action panel navigation
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => self.state.prev_button(),
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => self.state.next_button(),
            KeyCode::Enter if on_action_panel => self.activate(self.state.selected_action()),
            KeyCode::Left if self.state.active_field() == Some(FieldId::Reviewed) => {
                self.state.select_reviewed(Reviewed::Yes)
            }
            KeyCode::Right if self.state.active_field() == Some(FieldId::Reviewed) => {
                self.state.select_reviewed(Reviewed::No)
            }
            // Form field input (only when not on action panel)
            KeyCode::Char(c) if !on_action_panel && !ctrl => self.state.form_input_char(c),
            KeyCode::Backspace if !on_action_panel => self.state.form_backspace(),
            KeyCode::Enter if !on_action_panel => {
                let multiline = self
                    .state
                    .active_field()
                    .is_some_and(|id| self.state.form.field(id).is_multiline);
                if multiline {
                    self.state.form_newline();
                } else {
                    self.move_focus(true);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn activate(&mut self, button: ActionButton) {
        match button {
            ActionButton::Preview => self.preview(),
            ActionButton::Submit => self.submit(),
            ActionButton::Quit => self.quit = true,
        }
    }

    /// Move to the next/previous focus stop, evaluating the file selection
    /// when leaving the Files field
    fn move_focus(&mut self, forward: bool) {
        let leaving_files = self.state.active_field() == Some(FieldId::Files);
        if forward {
            self.state.next_form_field();
        } else {
            self.state.prev_form_field();
        }
        if leaving_files {
            // A rejection is already queued for display
            self.commit_file_selection();
        }
    }

    /// Run the gatekeeper over the Files text if it changed.
    ///
    /// Returns false when the selection was rejected and cleared.
    fn commit_file_selection(&mut self) -> bool {
        if !self.state.form.has_pending_selection() {
            return true;
        }
        let paths = parse_selection(self.state.form.files.as_text());
        match gate_selection(&paths, self.probe.as_ref()) {
            Ok(attachments) => {
                tracing::info!(count = attachments.len(), "File selection accepted");
                self.state.form.accept_selection(attachments);
                true
            }
            Err(err) => {
                self.state.form.clear_selection();
                self.surface(err.into());
                false
            }
        }
    }

    /// Evaluate a pending selection before previewing or submitting.
    /// On rejection focus goes back to Files so the user can pick again.
    fn selection_ready(&mut self) -> bool {
        if self.commit_file_selection() {
            return true;
        }
        self.state.focus_field(FieldId::Files);
        false
    }

    /// Check required fields. Quiet runs only move focus; loud runs also
    /// queue the message.
    pub fn validate(&mut self, quiet: bool) -> bool {
        match validate_form(&self.state.form) {
            Ok(()) => true,
            Err(err) => {
                self.report_invalid(err, quiet);
                false
            }
        }
    }

    fn report_invalid(&mut self, err: ValidationError, quiet: bool) {
        self.state.focus_field(err.field());
        if !quiet {
            self.surface(err.into());
        }
    }

    /// Open the preview dialog if the form is complete
    pub fn preview(&mut self) {
        if !self.selection_ready() || !self.validate(true) {
            return;
        }
        let payload = SubmissionPayload::snapshot(&self.state.form);
        self.state.flow.open_preview(payload);
    }

    /// Close the preview and return to the Preview button
    pub fn edit_preview(&mut self) {
        self.state.flow.close_preview(self.state.form.reviewed());
        self.state.focus_action(ActionButton::Preview);
    }

    /// Close the preview and submit
    pub fn confirm_preview(&mut self) {
        self.state.flow.close_preview(self.state.form.reviewed());
        self.submit();
    }

    /// Attempt a submission with the current form
    pub fn submit(&mut self) {
        if !self.selection_ready() {
            return;
        }
        let endpoint_configured = self.endpoint_configured();
        let decision = self
            .state
            .flow
            .attempt(&self.state.form, endpoint_configured, Utc::now());

        match decision {
            SubmitDecision::Blocked(BlockReason::InFlight) => {
                tracing::warn!("Submit ignored: a request is already in flight");
                self.copy_message = Some(BlockReason::InFlight.message().to_string());
            }
            SubmitDecision::Blocked(reason) => {
                self.state.focus_field(FieldId::Reviewed);
                self.push_error(reason.message());
            }
            SubmitDecision::Invalid(err) => self.report_invalid(err, false),
            SubmitDecision::Local(payload) => {
                tracing::info!(
                    org = %payload.org_name,
                    files = payload.files.len(),
                    "No endpoint configured; showing payload locally"
                );
            }
            SubmitDecision::Remote(payload) => self.dispatch(payload),
        }
    }

    /// Spawn the POST and keep the receiving end for [`App::poll_submission`]
    fn dispatch(&mut self, payload: SubmissionPayload) {
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };
        tracing::info!(
            org = %payload.org_name,
            files = payload.files.len(),
            "Dispatching submission"
        );
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = endpoint.submit(&payload).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Apply the submission result if it has arrived. Called every tick.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.finish_submission(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.finish_submission(Err(TransportError::Network(
                    "Submission task ended without a result".to_string(),
                )));
            }
        }
    }

    fn finish_submission(&mut self, result: SubmissionResult) {
        match &result {
            Ok(reply) => tracing::info!(%reply, "Submission accepted"),
            Err(err) => Self::log_error(&FormError::Transport(err.clone())),
        }
        if self.state.flow.complete(result) {
            self.state.reset_form();
        }
    }

    /// Copy the open preview as HTML, or the locally shown payload as JSON
    fn copy_current(&mut self) -> Result<()> {
        let (text, what) = if let Some(payload) = self.state.flow.preview() {
            (PreviewTable::from_payload(payload).to_html(), "preview HTML")
        } else if let SubmissionPhase::Succeeded(SubmitOutcome::Local(payload)) =
            self.state.flow.phase()
        {
            (payload.to_pretty_json(), "payload JSON")
        } else {
            self.copy_message = Some("Nothing to copy".to_string());
            return Ok(());
        };

        match self.copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some(format!("Copied {what}")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Await the in-flight submission instead of polling for it
    #[cfg(test)]
    async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending.take() {
            let result = rx.await.unwrap_or_else(|_| {
                Err(TransportError::Network(
                    "Submission task ended without a result".to_string(),
                ))
            });
            self.finish_submission(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::MockSubmitEndpoint;
    use crate::state::{complete_form, FakeProbe, Focus, StatusKind, MAX_FILE_SIZE};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn local_app() -> App {
        App::with_probe(None, Box::new(FakeProbe::default()))
    }

    fn app_with(mock: MockSubmitEndpoint) -> App {
        App::with_probe(Some(Arc::new(mock)), Box::new(FakeProbe::default()))
    }

    fn fill_complete(app: &mut App) {
        app.state.form = complete_form();
        app.state.flow.on_selection_change(Reviewed::Yes);
    }

    #[test]
    fn test_starts_reviewing_with_section_visible() {
        let app = local_app();
        assert_eq!(
            app.state.flow.phase(),
            &SubmissionPhase::Reviewing(Reviewed::Unset)
        );
        let visibility = app.state.form.visibility();
        assert!(visibility.section_visible);
        assert!(!visibility.warning_visible);
        assert!(!app.endpoint_configured());
    }

    #[test]
    fn test_quiet_validation_never_queues_messages() {
        let mut app = local_app();
        assert!(!app.validate(true));
        assert!(!app.state.has_errors());
        assert_eq!(app.state.focus, Focus::Field(FieldId::OrgName));

        assert!(!app.validate(false));
        assert_eq!(
            app.state.current_error(),
            Some("Please enter Organization Name.")
        );
    }

    #[test]
    fn test_quiet_and_loud_agree() {
        for case in [
            ReviewFormCase::Empty,
            ReviewFormCase::Complete,
            ReviewFormCase::NoChanges,
        ] {
            let mut quiet = local_app();
            let mut loud = local_app();
            quiet.state.form = case.build();
            loud.state.form = case.build();
            assert_eq!(quiet.validate(true), loud.validate(false), "{case:?}");
            assert!(!quiet.state.has_errors());
        }
    }

    #[derive(Debug)]
    enum ReviewFormCase {
        Empty,
        Complete,
        NoChanges,
    }

    impl ReviewFormCase {
        fn build(&self) -> crate::state::ReviewForm {
            match self {
                Self::Empty => crate::state::ReviewForm::new(),
                Self::Complete => complete_form(),
                Self::NoChanges => {
                    let mut form = complete_form();
                    form.changes.clear();
                    form
                }
            }
        }
    }

    #[test]
    fn test_loud_validation_focuses_offending_field() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.state.form.full_name.clear();
        app.state.focus_action(ActionButton::Submit);
        assert!(!app.validate(false));
        assert_eq!(app.state.focus, Focus::Field(FieldId::FullName));
        assert_eq!(
            app.state.current_error(),
            Some("Please type your full name as signature.")
        );
    }

    #[test]
    fn test_reviewed_no_blocks_without_network_call() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit().never();
        let mut app = app_with(mock);

        type_text(&mut app, "Acme");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Char('n'))).unwrap();
        assert!(app.state.form.visibility().warning_visible);

        app.handle_key(ctrl('s')).unwrap();
        assert_eq!(
            app.state.current_error(),
            Some("Please review the Summary first, then re-open the form and submit.")
        );
        assert_eq!(
            app.state.flow.phase(),
            &SubmissionPhase::Reviewing(Reviewed::No)
        );
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_unset_selection_blocks() {
        let mut app = local_app();
        type_text(&mut app, "Acme");
        app.submit();
        assert_eq!(
            app.state.current_error(),
            Some("Please confirm whether you reviewed the Summary (Yes/No).")
        );
        assert_eq!(app.state.focus, Focus::Field(FieldId::Reviewed));
    }

    #[test]
    fn test_no_endpoint_shows_payload_inline() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.submit();

        assert!(!app.state.has_errors());
        assert!(app.pending.is_none());
        let status = app.state.status().unwrap();
        assert_eq!(status.title, "No endpoint configured.");
        assert!(status.body.contains("\"fullName\": \"J. Smith\""));
        assert!(status.body.contains("\"changes\": \"fixed typo\""));
        // Local display does not clear the form
        assert_eq!(app.state.form.org_name.as_text(), "Acme");
    }

    #[tokio::test]
    async fn test_server_500_surfaces_transport_error_and_keeps_form() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(TransportError::Status(500)));
        let mut app = app_with(mock);
        fill_complete(&mut app);

        app.submit();
        assert!(app.state.flow.is_submitting());
        assert_eq!(app.state.status().unwrap().title, "Submitting...");

        app.wait_for_submission().await;
        let status = app.state.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.body, "Server returned 500");
        assert_eq!(app.state.form, complete_form());
    }

    #[tokio::test]
    async fn test_success_resets_form() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit()
            .withf(|payload| payload.org_name == "Acme" && payload.reviewed == Reviewed::Yes)
            .times(1)
            .returning(|_| Ok(ServerReply(serde_json::json!({"id": 42}))));
        let mut app = app_with(mock);
        fill_complete(&mut app);

        app.submit();
        app.wait_for_submission().await;

        let status = app.state.status().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.body, r#"{"id":42}"#);
        assert_eq!(app.state.form, crate::state::ReviewForm::new());
        assert!(app.state.form.visibility().section_visible);
        assert_eq!(app.state.focus, Focus::Field(FieldId::OrgName));
    }

    #[tokio::test]
    async fn test_double_submit_is_refused_while_in_flight() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Ok(ServerReply::generic()));
        let mut app = app_with(mock);
        fill_complete(&mut app);

        app.submit();
        app.submit();
        assert_eq!(
            app.copy_message.as_deref(),
            Some("A submission is already in progress.")
        );
        app.wait_for_submission().await;
        assert!(!app.state.flow.is_submitting());
    }

    #[tokio::test]
    async fn test_poll_submission_applies_result() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit()
            .returning(|_| Err(TransportError::Network("connection refused".to_string())));
        let mut app = app_with(mock);
        fill_complete(&mut app);
        app.submit();

        for _ in 0..100 {
            app.poll_submission();
            if !app.state.flow.is_submitting() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(
            app.state.flow.phase(),
            &SubmissionPhase::Failed(TransportError::Network("connection refused".to_string()))
        );
    }

    /// Type one path per line into the focused Files field
    fn type_paths(app: &mut App, paths: &[&str]) {
        for (i, path) in paths.iter().enumerate() {
            if i > 0 {
                app.handle_key(key(KeyCode::Enter)).unwrap();
            }
            type_text(app, path);
        }
    }

    fn assert_not_sent(app: &App) {
        assert_eq!(
            app.state.flow.phase(),
            &SubmissionPhase::Reviewing(Reviewed::Yes)
        );
        assert!(app.pending.is_none());
        assert_eq!(app.state.status(), None);
    }

    #[test]
    fn test_too_many_files_clears_selection_and_blocks_submit() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["a", "b", "c", "d", "e", "f"]);

        // Submit straight from the Files field, without tabbing out
        app.handle_key(ctrl('s')).unwrap();

        assert_eq!(
            app.state.current_error(),
            Some("Please select up to 5 files only.")
        );
        assert_eq!(app.state.error_count(), 1);
        assert_eq!(app.state.form.files.as_text(), "");
        assert!(app.state.form.attachments.is_empty());
        assert_eq!(app.state.focus, Focus::Field(FieldId::Files));
        assert_not_sent(&app);
    }

    #[tokio::test]
    async fn test_too_many_files_never_reach_endpoint() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit().never();
        let mut app = app_with(mock);
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["1", "2", "3", "4", "5", "6"]);

        app.handle_key(ctrl('s')).unwrap();

        assert_eq!(
            app.state.current_error(),
            Some("Please select up to 5 files only.")
        );
        assert!(!app.state.flow.is_submitting());
        assert_not_sent(&app);
    }

    #[tokio::test]
    async fn test_oversized_file_never_reaches_endpoint() {
        let mut mock = MockSubmitEndpoint::new();
        mock.expect_submit().never();
        let probe = FakeProbe::with(&[("small.txt", 10), ("big.bin", MAX_FILE_SIZE + 1)]);
        let mut app = App::with_probe(Some(Arc::new(mock)), Box::new(probe));
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["small.txt", "big.bin"]);

        app.handle_key(ctrl('s')).unwrap();

        assert_eq!(
            app.state.current_error(),
            Some("The file \"big.bin\" exceeds the maximum size of 8MB.")
        );
        assert!(app.state.form.attachments.is_empty());
        assert_not_sent(&app);
    }

    #[test]
    fn test_rejected_selection_keeps_preview_closed() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["a", "b", "c", "d", "e", "f"]);

        app.handle_key(ctrl('p')).unwrap();

        assert!(app.state.flow.preview().is_none());
        assert_eq!(
            app.state.current_error(),
            Some("Please select up to 5 files only.")
        );
    }

    #[test]
    fn test_submit_after_dismissing_rejection_sends_without_files() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["a", "b", "c", "d", "e", "f"]);
        app.handle_key(ctrl('s')).unwrap();
        app.handle_key(key(KeyCode::Esc)).unwrap();

        // The cleared selection is no longer pending; the next attempt goes through
        app.handle_key(ctrl('s')).unwrap();
        match app.state.flow.phase() {
            SubmissionPhase::Succeeded(SubmitOutcome::Local(payload)) => {
                assert!(payload.files.is_empty());
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn test_oversized_file_clears_whole_selection() {
        let probe = FakeProbe::with(&[("small.txt", 10), ("big.bin", MAX_FILE_SIZE + 1)]);
        let mut app = App::with_probe(None, Box::new(probe));
        app.state.focus_field(FieldId::Files);
        type_paths(&mut app, &["small.txt", "big.bin"]);
        app.handle_key(key(KeyCode::Tab)).unwrap();

        assert_eq!(
            app.state.current_error(),
            Some("The file \"big.bin\" exceeds the maximum size of 8MB.")
        );
        assert!(app.state.form.attachments.is_empty());
        assert_eq!(app.state.form.files.as_text(), "");
    }

    #[test]
    fn test_accepted_selection_reaches_payload() {
        let probe = FakeProbe::with(&[("report.pdf", 2048)]);
        let mut app = App::with_probe(None, Box::new(probe));
        fill_complete(&mut app);
        app.state.focus_field(FieldId::Files);
        type_text(&mut app, "report.pdf");
        app.submit();

        match app.state.flow.phase() {
            SubmissionPhase::Succeeded(SubmitOutcome::Local(payload)) => {
                assert_eq!(payload.files.len(), 1);
                assert_eq!(payload.files[0].name, "report.pdf");
                assert_eq!(payload.files[0].size, 2048);
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn test_preview_requires_valid_form() {
        let mut app = local_app();
        app.handle_key(ctrl('p')).unwrap();
        assert!(app.state.flow.preview().is_none());
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_preview_edit_returns_to_preview_button() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.handle_key(ctrl('p')).unwrap();
        assert!(app.state.flow.preview().is_some());

        // Typing is swallowed by the modal
        app.handle_key(key(KeyCode::Char('z'))).unwrap();
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.state.flow.preview().is_none());
        assert!(app.state.is_action_panel_focused());
        assert_eq!(app.state.selected_action(), ActionButton::Preview);
        assert_eq!(app.state.form, complete_form());
    }

    #[test]
    fn test_preview_confirm_submits() {
        let mut app = local_app();
        fill_complete(&mut app);
        app.preview();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(matches!(
            app.state.flow.phase(),
            SubmissionPhase::Succeeded(SubmitOutcome::Local(_))
        ));
    }

    #[test]
    fn test_error_dialog_is_modal() {
        let mut app = local_app();
        app.push_error("boom");
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.state.form.org_name.as_text(), "");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(!app.state.has_errors());
    }

    #[test]
    fn test_arrow_keys_pick_answer() {
        let mut app = local_app();
        app.state.focus_field(FieldId::Reviewed);
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(app.state.form.reviewed(), Reviewed::No);
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(app.state.form.reviewed(), Reviewed::Yes);
    }

    #[test]
    fn test_quit_button() {
        let mut app = local_app();
        app.state.focus_action(ActionButton::Quit);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_from_config_without_endpoint() {
        let app = App::from_config(&FormConfig::default()).unwrap();
        assert!(!app.endpoint_configured());
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = FormConfig {
            endpoint: Some("::not a url::".to_string()),
            ..Default::default()
        };
        assert!(App::from_config(&config).is_err());
    }
}
