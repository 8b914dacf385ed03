//! Preview relay.
//!
//! ```text
//!   browser ── POST /fetch-preview {"url"} ──▶ relay ── GET url ──▶ origin
//!   browser ◀── 200 body | 400 | 500 text ─── relay ◀── response ── origin
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use preview_relay::config::Cli;
use preview_relay::lifecycle::{wait_for_signal, Shutdown};
use preview_relay::observability::init_logging;
use preview_relay::RelayServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Existing environment variables take precedence over .env entries.
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve()?;

    init_logging(&config.logging);

    tracing::info!("preview-relay v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        log_format = %config.logging.format,
        "Configuration loaded"
    );

    let server = RelayServer::new(config)?;
    let listener = TcpListener::bind(server.config().listener.socket_addr()?).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        signal_shutdown.trigger();
    });

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
