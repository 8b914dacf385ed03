//! Command-line and environment overrides.
//!
//! Flags fall back to environment variables (`PORT`, `RELAY_HOST`, `RELAY_LOG_FORMAT`),
//! which `main` may have populated from a `.env` file first.

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::{LogFormat, RelayConfig};
use crate::config::validation::validate_config;

#[derive(Debug, Parser)]
#[command(name = "preview-relay", version)]
#[command(about = "Fetch a webpage server-side and relay its body to browser clients", long_about = None)]
pub struct Cli {
    /// Optional TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long, env = "RELAY_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 5000].
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Log output format: pretty or json.
    #[arg(long, env = "RELAY_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Assemble the effective config: file (or defaults), then overrides.
    pub fn resolve(&self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };

        if let Some(host) = &self.host {
            config.listener.host = host.clone();
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
