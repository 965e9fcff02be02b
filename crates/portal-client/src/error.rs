//! Error types for the upstream catalog client.
//!
//! Uses `thiserror` for typed errors. The taxonomy is deliberately small:
//! the upstream either could not be reached (or answered with a failure
//! status), or it answered with a body that does not match its own
//! contract. Related-resource fetch failures never surface here — they
//! degrade to `None` entries inside the fan-out (see [`crate::related`]).

use portal_types::EpisodeCodeError;

/// Errors that can occur when talking to the upstream catalog API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The upstream could not be reached, timed out, or returned a
    /// non-success status for a primary resource.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream answered, but the body is missing expected fields or
    /// an episode production code fails shape validation.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("client construction failed: {0}")]
    Construction(String),
}

impl From<EpisodeCodeError> for ClientError {
    fn from(source: EpisodeCodeError) -> Self {
        Self::MalformedResponse(source.to_string())
    }
}
