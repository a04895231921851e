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
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_port(env::var("PORT").ok(), defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Get the full bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port value, warning and falling back when it is not a valid `u16`.
fn parse_port(raw: Option<String>, default: u16) -> u16 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("invalid PORT '{}'; using default {}", raw, default);
            default
        }),
        None => default,
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "user-api".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
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
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(Some("9000".to_string()), 8080), 9000);
        assert_eq!(parse_port(Some(" 9000 ".to_string()), 8080), 9000);
        assert_eq!(parse_port(None, 8080), 8080);
    }

    #[test]
    fn test_parse_port_falls_back_on_garbage() {
        assert_eq!(parse_port(Some("http".to_string()), 8080), 8080);
        assert_eq!(parse_port(Some("70000".to_string()), 8080), 8080);
        assert_eq!(parse_port(Some(String::new()), 8080), 8080);
    }
}
