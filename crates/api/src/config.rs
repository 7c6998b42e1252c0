//! API configuration.

use std::env;

use common::ServiceConfig;

/// Environment variable prefix for host and port
const ENV_PREFIX: &str = "API";

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address, port and log level
    pub service: ServiceConfig,
    /// Serve Swagger UI and the OpenAPI document
    pub docs_enabled: bool,
    /// Allow any origin, method and header
    pub cors_permissive: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(ENV_PREFIX),
            docs_enabled: env_flag("API_DOCS_ENABLED").unwrap_or(true),
            cors_permissive: env_flag("API_CORS_PERMISSIVE").unwrap_or(false),
        }
    }

    /// Override bind address from the command line.
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        self.service.server_addr()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            docs_enabled: true,
            cors_permissive: false,
        }
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}
