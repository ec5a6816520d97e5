//! Error kinds surfaced to the user
//!
//! Every variant's `Display` is the exact message shown in the error dialog.

use crate::state::FieldId;
use thiserror::Error;

/// A required field is missing or invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter Organization Name.")]
    MissingOrgName,
    #[error("Please confirm whether you reviewed the Summary (Yes/No).")]
    MissingReviewed,
    #[error("Please describe any changes or type \"No changes.\"")]
    MissingChanges,
    #[error("Please confirm the accuracy by checking \"I agree\".")]
    NotAgreed,
    #[error("Please type your full name as signature.")]
    MissingSignature,
    #[error("Please upload up to {max} files only.")]
    TooManyFiles { max: usize },
}

impl ValidationError {
    /// The field that should receive focus when this check fails
    pub fn field(&self) -> FieldId {
        match self {
            Self::MissingOrgName => FieldId::OrgName,
            Self::MissingReviewed => FieldId::Reviewed,
            Self::MissingChanges => FieldId::Changes,
            Self::NotAgreed => FieldId::Agree,
            Self::MissingSignature => FieldId::FullName,
            Self::TooManyFiles { .. } => FieldId::Files,
        }
    }
}

/// A file selection was rejected by the gatekeeper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Please select up to {max} files only.")]
    TooMany { max: usize },
    #[error("The file \"{name}\" exceeds the maximum size of 8MB.")]
    TooLarge { name: String, size: u64 },
    #[error("The file \"{path}\" could not be read: {reason}")]
    Unreadable { path: String, reason: String },
}

/// The submission request failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Server returned {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("Could not read attachment \"{name}\": {reason}")]
    Attachment { name: String, reason: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Network(err.to_string()),
        }
    }
}

/// Any recoverable error the form can surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
