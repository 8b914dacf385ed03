//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → tracing events (relay outcome, server lifecycle)
//!     → per-request spans from TraceLayer, tagged with x-request-id
//!
//! Consumers:
//!     → stdout, pretty or JSON (logging.rs)
//! ```

pub mod logging;

pub use logging::init_logging;
