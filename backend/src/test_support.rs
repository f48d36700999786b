//! Test utilities shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and when the `test-support` feature is enabled.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::ports::UserRepository;
use crate::domain::{CreateUserResponse, Error, NewUser, User, UserId};

/// In-process [`UserRepository`] with the same uniqueness rules as the
/// PostgreSQL schema.
///
/// The identifier and username checks and the insert happen under one lock,
/// so concurrent creates race exactly as they would against the table
/// constraints: a duplicate identifier is an
/// [`UnknownConflict`](crate::domain::ErrorKind::UnknownConflict), a
/// duplicate username is
/// [`UsernameExists`](crate::domain::ErrorKind::UsernameExists).
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    /// Number of repository calls made so far, of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or_default()
    }

    /// Whether no user is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<UserId, User>>, Error> {
        self.users
            .lock()
            .map_err(|_| Error::internal("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<CreateUserResponse, Error> {
        self.record_call();
        let mut users = self.lock()?;
        if users.contains_key(&user.id) {
            return Err(Error::unknown_conflict(format!(
                "duplicate key value violates unique constraint \"users_pkey\": {}",
                user.id
            )));
        }
        let username = user.username.as_ref();
        if users.values().any(|existing| existing.username() == username) {
            return Err(Error::username_exists(format!(
                "Key (username)=({username}) already exists."
            )));
        }
        users.insert(user.id, User::new(user.id, username, ""));
        Ok(CreateUserResponse { user_id: user.id })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, Error> {
        self.record_call();
        self.lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| Error::user_not_found(format!("no user with id {id}")))
    }

    async fn find_by_username(&self, username: &str) -> Result<User, Error> {
        self.record_call();
        self.lock()?
            .values()
            .find(|user| user.username() == username)
            .cloned()
            .ok_or_else(|| Error::user_not_found(format!("no user named {username}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, Username};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn repository() -> InMemoryUserRepository {
        InMemoryUserRepository::default()
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            id: UserId::from_uuid(Uuid::new_v4()),
            username: Username::new(username).expect("valid username"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_username_is_rejected(repository: InMemoryUserRepository) {
        repository
            .create_user(&new_user("bobsmith"))
            .await
            .expect("first insert");

        let err = repository
            .create_user(&new_user("bobsmith"))
            .await
            .expect_err("second insert");

        assert_eq!(err.kind(), ErrorKind::UsernameExists);
        assert_eq!(repository.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_id_is_an_unknown_conflict(repository: InMemoryUserRepository) {
        let first = new_user("alice123");
        repository.create_user(&first).await.expect("first insert");

        let clash = NewUser {
            id: first.id,
            username: Username::new("carol99").expect("valid username"),
        };
        let err = repository
            .create_user(&clash)
            .await
            .expect_err("second insert");

        assert_eq!(err.kind(), ErrorKind::UnknownConflict);
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_find_stored_users(repository: InMemoryUserRepository) {
        let user = new_user("alice123");
        repository.create_user(&user).await.expect("insert");

        let by_id = repository.find_by_id(&user.id).await.expect("by id");
        let by_name = repository
            .find_by_username("alice123")
            .await
            .expect("by username");

        assert_eq!(by_id, by_name);
        assert_eq!(by_id.description(), "");
        assert_eq!(repository.calls(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_users_are_not_found(repository: InMemoryUserRepository) {
        let id = UserId::from_uuid(Uuid::new_v4());
        let by_id = repository.find_by_id(&id).await.expect_err("by id");
        let by_name = repository
            .find_by_username("ghost")
            .await
            .expect_err("by username");

        assert_eq!(by_id.kind(), ErrorKind::UserNotFound);
        assert_eq!(by_name.kind(), ErrorKind::UserNotFound);
    }
}
