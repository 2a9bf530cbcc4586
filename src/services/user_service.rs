//! User service - Handles user-related business logic.
//!
//! Translates the store's found/not-found results into `AppError`s and
//! validates input before anything reaches the store.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserStore;

/// Entity name used in not-found messages
const USER_ENTITY: &str = "user";

/// User service trait for dependency injection.
///
/// Each method performs exactly one store operation.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user, returning its assigned id
    async fn create_user(&self, user: User) -> AppResult<UserId>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Delete user by ID; a single atomic remove-if-present
    async fn delete_user(&self, id: UserId) -> AppResult<()>;

    /// Number of stored users
    fn count_users(&self) -> usize;
}

/// Concrete implementation of UserService over a `UserStore`.
pub struct UserManager<S: UserStore> {
    store: Arc<S>,
}

impl<S: UserStore> UserManager<S> {
    /// Create new user service instance
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + 'static> UserService for UserManager<S> {
    async fn create_user(&self, user: User) -> AppResult<UserId> {
        user.validate()?;

        let id = self.store.insert(user);
        tracing::info!(id, "User created");
        Ok(id)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.store.get(id).ok_or_not_found(USER_ENTITY)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.store.delete(id) {
            return Err(AppError::not_found(USER_ENTITY));
        }

        tracing::info!(id, "User deleted");
        Ok(())
    }

    fn count_users(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::infra::MockUserStore;

    fn service(store: MockUserStore) -> UserManager<MockUserStore> {
        UserManager::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_user_inserts_once() {
        let mut store = MockUserStore::new();
        store
            .expect_insert()
            .with(eq(User::new("Ada")))
            .times(1)
            .returning(|_| 7);

        let id = assert_ok!(service(store).create_user(User::new("Ada")).await);
        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_name_without_touching_store() {
        let mut store = MockUserStore::new();
        store.expect_insert().never();

        let err = assert_err!(service(store).create_user(User::default()).await);
        assert!(matches!(err, AppError::Validation(ref m) if m == "Name is required"));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut store = MockUserStore::new();
        store
            .expect_get()
            .with(eq(1))
            .returning(|_| Some(User::new("Ada")));

        let user = assert_ok!(service(store).get_user(1).await);
        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut store = MockUserStore::new();
        store.expect_get().returning(|_| None);

        let err = assert_err!(service(store).get_user(42).await);
        assert_eq!(err.to_string(), "user not found");
    }

    #[tokio::test]
    async fn test_delete_user_is_a_single_store_call() {
        let mut store = MockUserStore::new();
        store.expect_get().never();
        store
            .expect_delete()
            .with(eq(3))
            .times(1)
            .returning(|_| true);

        assert_ok!(service(store).delete_user(3).await);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut store = MockUserStore::new();
        store.expect_delete().times(1).returning(|_| false);

        let err = assert_err!(service(store).delete_user(3).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_count_users_reads_store_len() {
        let mut store = MockUserStore::new();
        store.expect_len().return_const(5usize);

        assert_eq!(service(store).count_users(), 5);
    }
}
