//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::{NewUser, User, UserId};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user records.
///
/// The adapter owns identity assignment: [`UserRepository::create`] returns
/// the stored record with its generated id.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user, returning the stored record.
    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Remove the user with the given id. Deleting a missing id succeeds
    /// without effect.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
