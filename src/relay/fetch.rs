//! Outbound fetch of a preview target.

use std::error::Error as _;

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Why an outbound fetch failed. Every variant is surfaced to the caller as
/// a 500 whose body is this error's display text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built or sent: malformed URL, DNS failure,
    /// refused connection, TLS failure.
    #[error("{}", describe(.0))]
    Transport(reqwest::Error),

    /// The origin answered with a client or server error status.
    #[error("{}", describe(.0))]
    Status(reqwest::Error),

    /// The origin's body could not be read or decoded as text.
    #[error("{}", describe(.0))]
    Body(reqwest::Error),
}

impl FetchError {
    /// Status returned by the origin, if it got that far.
    pub fn origin_status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Transport(e) | FetchError::Status(e) | FetchError::Body(e) => e.status(),
        }
    }
}

/// reqwest's own message is terse ("error sending request for url ...");
/// the cause chain carries the DNS or connect reason callers need to see.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Final status after redirects.
    pub status: StatusCode,
    /// Body text, decoded per the origin's charset.
    pub body: String,
}

/// Issues the outbound GET for each preview.
///
/// Wraps a pooled [`reqwest::Client`] with default settings; cloning is
/// cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher with the client's default transport settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    /// Use an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// GET `url` and return its text, treating 4xx/5xx as failure.
    pub async fn fetch_text(&self, url: &str) -> Result<Fetched, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?
            .error_for_status()
            .map_err(FetchError::Status)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::Body)?;

        Ok(Fetched { status, body })
    }
}
