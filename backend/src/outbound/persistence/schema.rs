//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// User identity records.
    ///
    /// `id` is supplied by the caller. `username` carries the named unique
    /// constraint `users_username_unique`.
    users (id) {
        /// Primary key, assigned by the caller.
        id -> Uuid,
        /// Unique username.
        username -> Text,
        /// Free-text profile description, empty by default.
        description -> Text,
    }
}
