//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{CreateUserResponse, Error, NewUser, User, UserId};

/// Storage contract for user records.
///
/// Implementations translate storage failures into the domain taxonomy:
///
/// - the username uniqueness constraint maps to
///   [`ErrorKind::UsernameExists`](crate::domain::ErrorKind::UsernameExists);
/// - any other integrity constraint maps to
///   [`ErrorKind::UnknownConflict`](crate::domain::ErrorKind::UnknownConflict);
/// - a lookup matching no row maps to
///   [`ErrorKind::UserNotFound`](crate::domain::ErrorKind::UserNotFound);
/// - everything else maps to
///   [`ErrorKind::Internal`](crate::domain::ErrorKind::Internal).
///
/// Uniqueness must be enforced atomically by the store on insert. Adapters
/// never pre-check for an existing username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return its identifier.
    async fn create_user(&self, user: &NewUser) -> Result<CreateUserResponse, Error>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<User, Error>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<User, Error>;
}
