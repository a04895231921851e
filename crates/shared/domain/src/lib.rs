//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user store and the HTTP layer both build on the types defined here.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{NewUser, User, UserPatch};
