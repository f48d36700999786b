//! Translation of Diesel and pool failures into the domain taxonomy.
//!
//! Integrity violations are routed by explicit constraint name. The
//! conflicting field is never inferred from the driver message.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::{Error, ErrorKind};

use super::pool::PoolError;

/// Unique constraint on `users.username`, as named in the migrations.
pub const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_unique";

/// Constraints with a dedicated domain kind.
///
/// Violations of any constraint missing from this table map to
/// [`ErrorKind::UnknownConflict`].
const CONSTRAINT_KINDS: &[(&str, ErrorKind)] =
    &[(USERNAME_UNIQUE_CONSTRAINT, ErrorKind::UsernameExists)];

fn is_integrity_violation(kind: &DatabaseErrorKind) -> bool {
    matches!(
        kind,
        DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation
    )
}

fn kind_for_constraint(constraint_name: Option<&str>) -> ErrorKind {
    let mapped = constraint_name.and_then(|name| {
        CONSTRAINT_KINDS
            .iter()
            .find(|(constraint, _)| *constraint == name)
            .map(|(_, kind)| *kind)
    });
    match mapped {
        Some(kind) => kind,
        None => {
            warn!(
                constraint_name = ?constraint_name,
                "unrecognised constraint violation - may need a dedicated error kind"
            );
            ErrorKind::UnknownConflict
        }
    }
}

fn describe(info: &dyn DatabaseErrorInformation) -> String {
    match info.details() {
        Some(details) => format!("{}: {details}", info.message()),
        None => info.message().to_owned(),
    }
}

fn log_diesel_error(error: &DieselError, operation: &str) {
    match error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = ?info.constraint_name(),
            %operation,
            "diesel operation failed"
        ),
        _ => debug!(%error, %operation, "diesel operation failed"),
    }
}

/// Map a failed insert.
///
/// Integrity violations become [`ErrorKind::UsernameExists`] or
/// [`ErrorKind::UnknownConflict`] by constraint name; everything else is
/// [`ErrorKind::Internal`].
pub fn map_write_error(error: DieselError, operation: &str) -> Error {
    log_diesel_error(&error, operation);
    match error {
        DieselError::DatabaseError(kind, info) if is_integrity_violation(&kind) => {
            let kind = kind_for_constraint(info.constraint_name());
            Error::new(kind).with_detail(describe(info.as_ref()))
        }
        other => Error::internal(other.to_string()),
    }
}

/// Map a failed single-row read.
///
/// A missing row becomes [`ErrorKind::UserNotFound`]; everything else is
/// [`ErrorKind::Internal`].
pub fn map_read_error(error: DieselError, operation: &str) -> Error {
    log_diesel_error(&error, operation);
    match error {
        DieselError::NotFound => Error::user_not_found(DieselError::NotFound.to_string()),
        other => Error::internal(other.to_string()),
    }
}

/// Map a pool checkout failure.
pub fn map_pool_error(error: PoolError) -> Error {
    debug!(%error, "connection checkout failed");
    Error::internal(error.to_string())
}
