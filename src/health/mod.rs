//! Liveness probe.
//!
//! `GET /health` answers as long as the process is serving. It makes no
//! outbound calls, so an unreachable origin never marks the relay down.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        version: env!("CARGO_PKG_VERSION"),
    })
}
