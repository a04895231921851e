//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Server-assigned identifier, also the store key
    pub id: String,
    /// Login name
    pub username: String,
    /// Contact address (not format-checked)
    pub email: String,
    /// Creation timestamp, set once on insert
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a stored record from accepted input and server-assigned fields.
    pub fn new(id: String, input: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            created_at,
        }
    }

    /// Merge a partial update. Empty or missing patch fields leave the
    /// current value in place; `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username.filter(|v| !v.is_empty()) {
            self.username = username;
        }
        if let Some(email) = patch.email.filter(|v| !v.is_empty()) {
            self.email = email;
        }
    }
}

/// User creation data transfer object
///
/// Missing fields decode as empty strings so they are reported by
/// [`NewUser::validate`] rather than as malformed JSON. Client-supplied
/// `id` and `createdAt` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewUser {
    /// Login name (required)
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Contact address (required)
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Presence check run before a record is accepted.
    pub fn validate(&self) -> DomainResult<()> {
        Validate::validate(self).map_err(|e| DomainError::validation(describe(&e)))
    }
}

/// User update data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPatch {
    /// New login name, ignored when empty
    pub username: Option<String>,
    /// New contact address, ignored when empty
    pub email: Option<String>,
}

impl UserPatch {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Flatten field errors into one message, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|e| {
            e.message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| e.code.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
