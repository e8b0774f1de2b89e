//! In-process `UserRepository` adapter.
//!
//! Backs the HTTP integration tests and serves as an explicit no-database
//! fallback for local demos. Identity assignment is atomic so concurrent
//! creates never collide.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// In-memory implementation of the `UserRepository` port.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl MemoryUserRepository {
    /// Create an empty repository; ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.store()?.clone())
    }

    async fn create(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = User::from_stored(id, user.last_name(), user.first_name());
        self.store()?.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.store()?.retain(|user| user.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_user(last: &str, first: &str) -> NewUser {
        NewUser::new(last, first).expect("valid names")
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_list_preserves_order() {
        let repo = MemoryUserRepository::new();
        let first = repo.create(new_user("Lovelace", "Ada")).await.expect("create");
        let second = repo.create(new_user("Curie", "Marie")).await.expect("create");
        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));

        let listed = repo.list().await.expect("list");
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_user() {
        let repo = MemoryUserRepository::new();
        let kept = repo.create(new_user("Lovelace", "Ada")).await.expect("create");
        let gone = repo.create(new_user("Curie", "Marie")).await.expect("create");

        repo.delete(gone.id).await.expect("delete");
        assert_eq!(repo.list().await.expect("list"), vec![kept]);
    }

    #[tokio::test]
    async fn deleting_a_missing_id_is_a_no_op() {
        let repo = MemoryUserRepository::new();
        let user = repo.create(new_user("Lovelace", "Ada")).await.expect("create");

        repo.delete(UserId::new(999)).await.expect("delete succeeds");
        assert_eq!(repo.list().await.expect("list"), vec![user]);
    }

    #[rstest]
    #[tokio::test]
    async fn concurrent_creates_assign_distinct_ids() {
        let repo = Arc::new(MemoryUserRepository::new());
        let creates = (0..16).map(|i| {
            let repo = Arc::clone(&repo);
            async move {
                repo.create(new_user(&format!("Last{i}"), &format!("First{i}")))
                    .await
                    .expect("create succeeds")
            }
        });
        let created = futures::future::join_all(creates).await;

        let ids: HashSet<UserId> = created.iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), created.len());
    }
}
