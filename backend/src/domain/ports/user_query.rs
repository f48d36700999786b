//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for loading user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Load a user by identifier.
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, Error>;

    /// Load a user by username.
    async fn get_user_by_username(&self, username: &str) -> Result<User, Error>;
}
