//! API configuration.

use common::ServiceConfig;
use user_store::StoreConfig;

/// API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address, service name and log level
    pub service: ServiceConfig,
    /// User store settings
    pub store: StoreConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(),
            store: StoreConfig::from_env(),
        }
    }
}
