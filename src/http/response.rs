//! Response handling.
//!
//! Maps relay failures to HTTP status codes. The body of every error response
//! is the error's display text, so callers see the underlying cause.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::relay::FetchError;

/// Every way a `/fetch-preview` call can end without a relayed body.
#[derive(Debug, Error)]
pub enum RelayError {
    /// `url` absent, null, or empty.
    #[error("URL is required")]
    MissingUrl,

    /// `url` is truthy but not a string (a number, `true`, a non-empty
    /// array or object).
    #[error("Invalid URL '{0}': expected a string")]
    InvalidUrl(String),

    /// The payload could not be decoded (bad JSON, wrong content type,
    /// non-object body).
    #[error("{0}")]
    Payload(String),

    /// The outbound fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingUrl => StatusCode::BAD_REQUEST,
            RelayError::InvalidUrl(_) | RelayError::Payload(_) | RelayError::Fetch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        RelayError::Payload(rejection.body_text())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
