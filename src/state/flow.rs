//! Submission state machine
//!
//! `Idle -> Reviewing -> [blocked | Previewing] -> Submitting -> Succeeded | Failed`.
//! Blocked and invalid attempts are reported through [`SubmitDecision`] and
//! leave the flow in `Reviewing`.

use super::forms::{ReviewForm, Reviewed};
use super::payload::SubmissionPayload;
use super::validation::validate_form;
use super::visibility::REVIEW_FIRST_MESSAGE;
use crate::endpoint::ServerReply;
use crate::error::{TransportError, ValidationError};
use chrono::{DateTime, Utc};

/// Why a submit attempt was refused before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// No yes/no answer yet
    NoSelection,
    /// Answered "no": the Summary must be reviewed first
    NeedsReview,
    /// A request is already in flight
    InFlight,
}

impl BlockReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoSelection => "Please confirm whether you reviewed the Summary (Yes/No).",
            Self::NeedsReview => REVIEW_FIRST_MESSAGE,
            Self::InFlight => "A submission is already in progress.",
        }
    }
}

/// Terminal success states
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No endpoint configured; the payload is displayed instead of sent
    Local(SubmissionPayload),
    /// The endpoint accepted the submission
    Remote(ServerReply),
}

/// Where the flow currently is
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Reviewing(Reviewed),
    Previewing(SubmissionPayload),
    Submitting,
    Succeeded(SubmitOutcome),
    Failed(TransportError),
}

/// What the caller must do after a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    Blocked(BlockReason),
    Invalid(ValidationError),
    /// Nothing to send; the payload is shown locally
    Local(SubmissionPayload),
    /// Dispatch this payload to the endpoint, then call [`SubmissionFlow::complete`]
    Remote(SubmissionPayload),
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    phase: SubmissionPhase,
}

impl SubmissionFlow {
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    /// Payload currently shown in the preview dialog, if any
    pub fn preview(&self) -> Option<&SubmissionPayload> {
        match &self.phase {
            SubmissionPhase::Previewing(payload) => Some(payload),
            _ => None,
        }
    }

    /// Track a new yes/no answer. Result states stay on screen until the next attempt.
    pub fn on_selection_change(&mut self, reviewed: Reviewed) {
        if matches!(
            self.phase,
            SubmissionPhase::Idle | SubmissionPhase::Reviewing(_)
        ) {
            self.phase = SubmissionPhase::Reviewing(reviewed);
        }
    }

    /// Show a payload in the preview dialog
    pub fn open_preview(&mut self, payload: SubmissionPayload) {
        if !self.is_submitting() {
            self.phase = SubmissionPhase::Previewing(payload);
        }
    }

    /// Close the preview dialog without submitting
    pub fn close_preview(&mut self, reviewed: Reviewed) {
        if self.preview().is_some() {
            self.phase = SubmissionPhase::Reviewing(reviewed);
        }
    }

    /// Decide what a submit attempt does with the current form
    pub fn attempt(
        &mut self,
        form: &ReviewForm,
        endpoint_configured: bool,
        now: DateTime<Utc>,
    ) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Blocked(BlockReason::InFlight);
        }

        let reviewed = form.reviewed();
        self.phase = SubmissionPhase::Reviewing(reviewed);

        match reviewed {
            Reviewed::Unset => return SubmitDecision::Blocked(BlockReason::NoSelection),
            Reviewed::No => return SubmitDecision::Blocked(BlockReason::NeedsReview),
            Reviewed::Yes => {}
        }

        if let Err(err) = validate_form(form) {
            return SubmitDecision::Invalid(err);
        }

        let payload = SubmissionPayload::build(form, now);
        if endpoint_configured {
            self.phase = SubmissionPhase::Submitting;
            SubmitDecision::Remote(payload)
        } else {
            self.phase = SubmissionPhase::Succeeded(SubmitOutcome::Local(payload.clone()));
            SubmitDecision::Local(payload)
        }
    }

    /// Apply the endpoint's answer. Returns true when the form should be reset.
    pub fn complete(&mut self, result: Result<ServerReply, TransportError>) -> bool {
        if !self.is_submitting() {
            tracing::warn!("Ignoring submission result outside of an in-flight request");
            return false;
        }
        match result {
            Ok(reply) => {
                self.phase = SubmissionPhase::Succeeded(SubmitOutcome::Remote(reply));
                true
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed(err);
                false
            }
        }
    }
}
