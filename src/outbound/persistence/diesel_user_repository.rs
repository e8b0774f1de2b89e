//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and domain values and maps
//! database failures into `UserPersistenceError` variants. No business logic
//! resides here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Ping { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map common Diesel error variants to domain persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
fn row_to_user(row: UserRow) -> User {
    User::from_stored(UserId::new(row.id), row.last_name, row.first_name)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            last_name: user.last_name(),
            first_name: user.first_name(),
        };
        let stored = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_user(stored))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Zero affected rows is a successful no-op, not an error.
        let deleted = diesel::delete(users::table.filter(users::id.eq(id.value())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(id = %id, deleted, "user delete executed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let mapped = map_pool_error(PoolError::checkout("refused"));
        assert_eq!(mapped, UserPersistenceError::connection("refused"));
    }

    #[rstest]
    fn not_found_maps_to_query_failure() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(mapped, UserPersistenceError::query("record not found"));
    }

    #[rstest]
    fn rows_convert_to_domain_users() {
        let user = row_to_user(UserRow {
            id: 3,
            last_name: "Curie".into(),
            first_name: "Marie".into(),
        });
        assert_eq!(user, User::from_stored(UserId::new(3), "Curie", "Marie"));
    }
}
