//! Submission payload snapshot

use super::attachment::Attachment;
use super::forms::{ReviewForm, Reviewed};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the form, sent as the `payload` multipart field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub org_name: String,
    pub reviewed: Reviewed,
    pub changes: String,
    pub change_type: String,
    pub agree: bool,
    pub full_name: String,
    pub files: Vec<Attachment>,
    pub submitted_at: String,
}

impl SubmissionPayload {
    /// Snapshot the form at `now`. Does not validate.
    pub fn build(form: &ReviewForm, now: DateTime<Utc>) -> Self {
        Self {
            org_name: form.org_name.trimmed().to_string(),
            reviewed: form.reviewed(),
            changes: form.changes.trimmed().to_string(),
            change_type: form.change_type.trimmed().to_string(),
            agree: form.agree.as_flag(),
            full_name: form.full_name.trimmed().to_string(),
            files: form.attachments.clone(),
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Snapshot the form stamped with the current time
    pub fn snapshot(form: &ReviewForm) -> Self {
        Self::build(form, Utc::now())
    }

    /// Indented JSON, as shown when no endpoint is configured
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}
