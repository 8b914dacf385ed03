//! The relay itself: one inbound POST, one outbound GET.
//!
//! # Data Flow
//! ```text
//! POST /fetch-preview {"url": ...}
//!     → handler.rs (decode payload, presence check)
//!     → fetch.rs (GET url, reject 4xx/5xx, read text)
//!     → 200 body | 400 "URL is required" | 500 error text
//! ```
//!
//! # Design Decisions
//! - No timeout, retry, or redirect policy beyond the client defaults
//! - URL syntax is not checked; the client reports malformed URLs
//! - The body is returned verbatim, never rewritten

pub mod fetch;
pub mod handler;

pub use fetch::{FetchError, Fetched, Fetcher};
pub use handler::fetch_preview;
