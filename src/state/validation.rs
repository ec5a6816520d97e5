//! Required-field checks run before preview and submission

use super::attachment::MAX_FILES;
use super::forms::{ReviewForm, Reviewed};
use crate::error::ValidationError;

/// Run every check in order, stopping at the first failure
pub fn validate_form(form: &ReviewForm) -> Result<(), ValidationError> {
    if form.org_name.trimmed().is_empty() {
        return Err(ValidationError::MissingOrgName);
    }

    match form.reviewed() {
        Reviewed::Unset => return Err(ValidationError::MissingReviewed),
        Reviewed::Yes if form.changes.trimmed().is_empty() => {
            return Err(ValidationError::MissingChanges);
        }
        Reviewed::Yes | Reviewed::No => {}
    }

    if !form.agree.as_flag() {
        return Err(ValidationError::NotAgreed);
    }

    if form.full_name.trimmed().is_empty() {
        return Err(ValidationError::MissingSignature);
    }

    if form.attachments.len() > MAX_FILES {
        return Err(ValidationError::TooManyFiles { max: MAX_FILES });
    }

    Ok(())
}
