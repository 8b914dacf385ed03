//! Configuration validation.
//!
//! Returns every problem found, not just the first, so an operator can fix a
//! config file in one pass.

use std::fmt;
use std::net::IpAddr;

use crate::config::schema::RelayConfig;

/// A single semantic problem in a [`RelayConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Check semantic constraints that serde cannot express.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.host",
            message: format!("`{}` is not an IP address", config.listener.host),
        });
    }

    if config.logging.filter.trim().is_empty() {
        errors.push(ValidationError {
            field: "logging.filter",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = RelayConfig::default();
        config.listener.host = "localhost".into();
        config.logging.filter = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["listener.host", "logging.filter"]);
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let mut config = RelayConfig::default();
        config.listener.host = "::1".into();
        assert!(validate_config(&config).is_ok());
    }
}
