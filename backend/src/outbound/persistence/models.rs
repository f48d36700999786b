//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{User, UserId};

use super::schema::users;

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub description: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::from_uuid(row.id), row.username, row.description)
    }
}

/// Insertable user record; `description` falls back to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}
