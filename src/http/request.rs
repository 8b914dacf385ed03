//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for each inbound request
//! - Define the `/fetch-preview` payload schema and its presence check

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::http::response::RelayError;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Assigns a fresh UUID v4 to requests that arrive without an ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}

/// Body of `POST /fetch-preview`. Unknown fields are ignored.
///
/// `url` is kept as raw JSON so that every falsy value, not only a missing
/// string, is reported as a missing URL.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PreviewRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

impl PreviewRequest {
    /// The URL to fetch.
    ///
    /// Absent, `null`, `false`, zero, `""`, `[]` and `{}` are
    /// [`RelayError::MissingUrl`]. Any other string, even whitespace, is
    /// passed through unchecked. Any other value is [`RelayError::InvalidUrl`].
    pub fn target(&self) -> Result<&str, RelayError> {
        let Some(url) = self.url.as_ref().filter(|v| is_truthy(v)) else {
            return Err(RelayError::MissingUrl);
        };
        match url {
            Value::String(url) => Ok(url.as_str()),
            other => Err(RelayError::InvalidUrl(other.to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
