//! User data model and username validation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Minimum allowed username length, in bytes of UTF-8.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed username length, in bytes of UTF-8.
pub const USERNAME_MAX: usize = 15;

/// Validation errors returned by [`validate_username`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameValidationError {
    /// Shorter than [`USERNAME_MIN`] bytes.
    #[error("username length must be between {min} and {max} bytes, got {actual}")]
    TooShort {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
        /// Observed length.
        actual: usize,
    },
    /// Longer than [`USERNAME_MAX`] bytes.
    #[error("username length must be between {min} and {max} bytes, got {actual}")]
    TooLong {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
        /// Observed length.
        actual: usize,
    },
}

/// Check the username length bounds.
///
/// Only the UTF-8 byte length is checked here. Uniqueness is enforced atomically by the
/// store when the user is inserted.
///
/// # Examples
/// ```
/// use user_service::domain::validate_username;
///
/// assert!(validate_username("alice123").is_ok());
/// assert!(validate_username("ab").is_err());
/// ```
pub fn validate_username(username: &str) -> Result<(), UsernameValidationError> {
    let actual = username.len();
    if actual < USERNAME_MIN {
        return Err(UsernameValidationError::TooShort {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
            actual,
        });
    }
    if actual > USERNAME_MAX {
        return Err(UsernameValidationError::TooLong {
            min: USERNAME_MIN,
            max: USERNAME_MAX,
            actual,
        });
    }
    Ok(())
}

/// Caller-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username that passed [`validate_username`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username.
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameValidationError> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored user record.
///
/// ## Invariants
/// - `id` and `username` are each unique across all users.
/// - `username` satisfied the length bounds when the user was created; reads
///   do not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    description: String,
}

impl User {
    /// Build a user from stored components.
    pub fn new(id: UserId, username: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            description: description.into(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Free-text profile description; empty for new users.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Input to the create-user use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// Identifier chosen by the upstream registration flow.
    pub user_id: UserId,
    /// Desired username, not yet validated.
    pub username: String,
}

/// Validated user ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Identifier chosen by the caller.
    pub id: UserId,
    /// Validated username.
    pub username: Username,
}

/// Result of a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateUserResponse {
    /// Identifier of the stored user.
    pub user_id: UserId,
}
