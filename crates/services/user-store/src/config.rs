//! User store configuration.

use std::env;

use crate::id::IdStrategy;

/// User store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Strategy used to assign ids on create
    pub id_strategy: IdStrategy,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// An unrecognised `USER_ID_STRATEGY` falls back to the default with a warning.
    pub fn from_env() -> Self {
        let id_strategy = match env::var("USER_ID_STRATEGY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; using default", e);
                IdStrategy::default()
            }),
            Err(_) => IdStrategy::default(),
        };

        Self { id_strategy }
    }
}
