//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, payload schema)
//!     → relay handler / health probe
//!     → response.rs (error → status + text body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, PreviewRequest, X_REQUEST_ID};
pub use response::RelayError;
pub use server::{AppState, RelayServer};
