//! Application state for dependency injection.

use std::sync::Arc;

use user_store::{UserRepository, UserStore};

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state around an existing repository.
    pub fn new(users: Arc<dyn UserRepository>, config: ApiConfig) -> Self {
        Self { users, config }
    }

    /// Create app state with a fresh, empty in-memory store.
    pub fn from_config(config: ApiConfig) -> Self {
        let users = Arc::new(UserStore::from_config(&config.store));
        Self::new(users, config)
    }
}
