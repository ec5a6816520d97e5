//! Submission endpoint module for HTTP communication

mod client;
mod traits;

pub use client::EndpointClient;
pub use traits::{ServerReply, SubmitEndpoint};

#[cfg(test)]
pub use traits::MockSubmitEndpoint;
