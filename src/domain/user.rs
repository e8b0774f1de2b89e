//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by [`NewUser::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Last name is empty after trimming whitespace.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// First name is empty after trimming whitespace.
    #[error("first name must not be empty")]
    EmptyFirstName,
}

/// Stable user identifier assigned by the persistence adapter.
///
/// The wrapped integer comes from the database's identity column and is
/// immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a database-assigned identifier.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw identifier value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// A persisted user record.
///
/// Serialises with camelCase keys so template contexts read
/// `{{lastName}}` / `{{firstName}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database-assigned identity.
    pub id: UserId,
    /// Family name, never blank.
    pub last_name: String,
    /// Given name, never blank.
    pub first_name: String,
}

impl User {
    /// Assemble a record from its stored parts.
    ///
    /// Intended for persistence adapters; name validation happened when the
    /// originating [`NewUser`] was constructed.
    #[must_use]
    pub fn from_stored(
        id: UserId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }
}

/// A user pending creation, validated but without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    last_name: String,
    first_name: String,
}

impl NewUser {
    /// Validate and construct a new user from form input.
    ///
    /// Both names are trimmed; blank input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when either name is empty after
    /// trimming.
    pub fn new(
        last_name: impl AsRef<str>,
        first_name: impl AsRef<str>,
    ) -> Result<Self, UserValidationError> {
        let last_name = last_name.as_ref().trim();
        if last_name.is_empty() {
            return Err(UserValidationError::EmptyLastName);
        }
        let first_name = first_name.as_ref().trim();
        if first_name.is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        Ok(Self {
            last_name: last_name.to_owned(),
            first_name: first_name.to_owned(),
        })
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}
