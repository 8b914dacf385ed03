//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the relay and health handlers
//! - Wire up middleware (request ID, tracing, CORS)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::health;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::relay::{self, Fetcher};

/// Application state injected into handlers.
///
/// Immutable after startup; the fetcher's connection pool is the only thing
/// calls share.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a server with a default outbound client.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_fetcher(config, Fetcher::new()?))
    }

    /// Create a server that fetches through the given fetcher.
    pub fn with_fetcher(config: RelayConfig, fetcher: Fetcher) -> Self {
        let router = Self::build_router(AppState { fetcher });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive());

        Router::new()
            .route("/fetch-preview", post(relay::fetch_preview))
            .route("/health", get(health::health_check))
            .with_state(state)
            .layer(middleware)
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
