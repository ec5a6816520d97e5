//! Trait abstraction for the submission endpoint to enable mocking in tests

use crate::error::TransportError;
use crate::state::SubmissionPayload;
use async_trait::async_trait;
use std::fmt;

/// Body of a successful submission response
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply(pub serde_json::Value);

impl ServerReply {
    /// Parse a response body; anything that is not JSON counts as a plain success
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body)
            .map(Self)
            .unwrap_or_else(|_| Self::generic())
    }

    /// Stand-in for a success response without a readable body
    pub fn generic() -> Self {
        Self(serde_json::json!({ "success": true }))
    }
}

impl fmt::Display for ServerReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Somewhere a completed form can be posted
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitEndpoint: Send + Sync {
    /// Post the payload and its attachments; one attempt, no retries
    async fn submit(&self, payload: &SubmissionPayload) -> Result<ServerReply, TransportError>;
}
