//! Common error types and handling for Tertulia
//!
//! Every fallible operation in the API returns [`Error`]. The taxonomy is
//! closed: a failure is either client-fixable validation input, an identity
//! miss, or an internal fault. The [`IntoResponse`] impl at the bottom is the
//! single point where these values become transport responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::fields::FieldErrors;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure category, independent of the human-readable message.
///
/// Tests assert on this rather than string-matching messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Validation,
    NotFound,
    Internal,
}

/// Common error type for the Tertulia application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A single validation message, safe to echo to the client.
    #[error("{0}")]
    Validation(String),

    /// Aggregated per-field validation failures, safe to echo to the client.
    #[error("{0}")]
    Fields(FieldErrors),

    /// A lookup by identity yielded zero rows. The cause is kept for
    /// inspection but never exposed to the client.
    #[error("no results found")]
    NotFound(anyhow::Error),

    /// Infrastructure or unexpected failure. The cause is logged server-side
    /// and suppressed from the client.
    #[error("an internal server error occurred")]
    Internal(anyhow::Error),
}

impl Error {
    /// Malformed input or a failed field rule. Maps to 400.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// A lookup by identity found nothing. Maps to 404.
    pub fn not_found(cause: impl Into<anyhow::Error>) -> Self {
        Error::NotFound(cause.into())
    }

    /// A failure unrelated to user input. Maps to 500.
    pub fn internal(cause: impl Into<anyhow::Error>) -> Self {
        Error::Internal(cause.into())
    }

    /// Classify this error into the closed taxonomy.
    pub fn kind(&self) -> Kind {
        match self {
            Error::Validation(_) | Error::Fields(_) => Kind::Validation,
            Error::NotFound(_) => Kind::NotFound,
            Error::Internal(_) => Kind::Internal,
        }
    }

    /// Get the appropriate HTTP status code for this error. The mapping is
    /// fixed at construction time and never changes afterwards.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            Kind::Validation => StatusCode::BAD_REQUEST,
            Kind::NotFound => StatusCode::NOT_FOUND,
            Kind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The wrapped cause, for NotFound and Internal errors.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Error::NotFound(cause) | Error::Internal(cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<FieldErrors> for Error {
    fn from(fields: FieldErrors) -> Self {
        Error::Fields(fields)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal causes are logged here and nowhere else; the client only
        // ever sees the generic message.
        if self.kind() == Kind::Internal {
            tracing::error!(error = ?self.cause(), "internal server error");
        }

        let body = match &self {
            Error::Validation(message) => json!({ "error": message }),
            Error::Fields(fields) => {
                serde_json::to_value(fields).unwrap_or_else(|_| json!({ "error": "invalid input" }))
            }
            Error::NotFound(_) | Error::Internal(_) => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
