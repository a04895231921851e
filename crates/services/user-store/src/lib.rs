//! User Store Library
//!
//! This crate owns the in-memory user collection. A single reader-writer
//! lock guards the whole map: reads share it, mutations take it
//! exclusively, and nothing outside the store holds a reference to the map.

pub mod config;
pub mod id;
pub mod repository;

pub use config::StoreConfig;
pub use id::{IdGenerator, IdStrategy};
pub use repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
