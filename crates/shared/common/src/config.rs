//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Load from `<PREFIX>_HOST`, `<PREFIX>_PORT` and `RUST_LOG`, falling back
    /// to defaults for anything unset or unparseable.
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            service_name: defaults.service_name,
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "person-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "person-api");
        assert_eq!(config.server_addr(), "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let config = ServiceConfig::from_env("COMMON_CONFIG_TEST_UNSET");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
    }
}
