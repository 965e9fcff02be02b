//! Error types for the page server.
//!
//! [`PortalError`] unifies all failure modes into a single enum that can
//! be converted into an HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Error
//! responses are plain text with no structured body: upstream failures on
//! listing routes map to 500, a missing detail record maps to 400, and
//! data-contract violations map to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use portal_client::ClientError;

/// Errors that can occur while serving a page.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A listing fetch against the upstream failed.
    #[error("listing fetch failed: {0}")]
    Listing(ClientError),

    /// A detail fetch against the upstream failed.
    #[error("detail fetch failed: {0}")]
    Detail(ClientError),

    /// A page template could not be loaded or rendered.
    #[error("template error: {0}")]
    Render(String),

    /// Configuration is invalid or missing.
    #[error("config error: {0}")]
    Config(String),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        warn!(error = %self, "request failed");

        let (status, message) = match &self {
            Self::Listing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The catalog could not be reached. Please try again later.",
            ),
            Self::Detail(ClientError::UpstreamUnavailable(_)) => (
                StatusCode::BAD_REQUEST,
                "The requested record was not found. Please check the id and try again.",
            ),
            Self::Detail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The catalog returned data this page cannot display.",
            ),
            Self::Render(_) | Self::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong while building this page.",
            ),
        };

        (status, message).into_response()
    }
}
