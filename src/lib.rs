//! Preview relay library.
//!
//! Fetches a third-party page server-side and returns its body to a browser
//! client that cross-origin rules would otherwise block.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
