//! In-memory user repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use domain::{DomainResult, NewUser, User, UserPatch};

use crate::config::StoreConfig;
use crate::id::IdGenerator;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// All methods are safe to call concurrently. A missing id is reported as
/// `None`/`false`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every stored user, in no particular order
    fn list(&self) -> Vec<User>;

    /// Find user by ID
    fn get(&self, id: &str) -> Option<User>;

    /// Validate input, assign id and timestamp, then insert
    fn create(&self, input: NewUser) -> DomainResult<User>;

    /// Merge non-empty patch fields into an existing user
    fn update(&self, id: &str, patch: UserPatch) -> Option<User>;

    /// Remove user by ID; `false` when it was not present
    fn delete(&self, id: &str) -> bool;
}

/// Concrete implementation of UserRepository backed by a locked map
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
    ids: IdGenerator,
}

impl UserStore {
    /// Create an empty store with the default id strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store using the given id generator
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            ids,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_id_generator(IdGenerator::new(config.id_strategy))
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No method panics while holding a guard, so a poisoned lock still
    // protects a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, User>> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, User>> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserRepository for UserStore {
    fn list(&self) -> Vec<User> {
        self.read().values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<User> {
        self.read().get(id).cloned()
    }

    fn create(&self, input: NewUser) -> DomainResult<User> {
        input.validate()?;

        // Everything but the insert happens outside the lock
        let user = User::new(self.ids.next_id(), input, Utc::now());
        self.write().insert(user.id.clone(), user.clone());

        debug!(user_id = %user.id, "User created");
        Ok(user)
    }

    fn update(&self, id: &str, patch: UserPatch) -> Option<User> {
        let updated = {
            let mut users = self.write();
            let user = users.get_mut(id)?;
            user.apply(patch);
            user.clone()
        };

        debug!(user_id = %id, "User updated");
        Some(updated)
    }

    fn delete(&self, id: &str) -> bool {
        let removed = self.write().remove(id).is_some();

        if removed {
            debug!(user_id = %id, "User deleted");
        }
        removed
    }
}
