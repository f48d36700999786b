//! User domain service.
//!
//! Implements the driving ports on top of a [`UserRepository`]. Validation
//! runs before any storage call; repository errors pass through with their
//! kind intact and a `repo` context annotation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserCommand, UserQuery, UserRepository};
use crate::domain::{
    CreateUserRequest, CreateUserResponse, Error, NewUser, User, UserId, Username,
};

const REPOSITORY_CONTEXT: &str = "repo";

/// User service implementing [`UserCommand`] and [`UserQuery`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn annotate(error: Error) -> Error {
    error.context(REPOSITORY_CONTEXT)
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Error> {
        let CreateUserRequest { user_id, username } = request;
        let username = Username::new(username).map_err(|err| {
            debug!(%user_id, error = %err, "rejecting username");
            Error::invalid_username(err.to_string())
        })?;

        let new_user = NewUser {
            id: user_id,
            username,
        };
        self.repository
            .create_user(&new_user)
            .await
            .map_err(annotate)
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, Error> {
        self.repository.find_by_id(id).await.map_err(annotate)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, Error> {
        self.repository
            .find_by_username(username)
            .await
            .map_err(annotate)
    }
}
