//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{CreateUserRequest, CreateUserResponse, Error};

/// Use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Validate the request and store a new user.
    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Error>;
}
