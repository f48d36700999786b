//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Uniqueness of `id` and `username` is enforced by the table constraints on
//! insert; this adapter never pre-checks. Every call, connection checkout
//! included, runs under the configured query timeout.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::UserRepository;
use crate::domain::{CreateUserResponse, Error, NewUser, User, UserId};

use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;
use super::user_error_mapping::{map_pool_error, map_read_error, map_write_error};

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    query_timeout: Duration,
}

impl DieselUserRepository {
    /// Default upper bound for a single repository call.
    pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            query_timeout: Self::DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the per-call timeout.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>> + Send,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = self.query_timeout.as_millis();
                warn!(operation, timeout_ms, "user repository call timed out");
                Err(Error::internal(format!(
                    "{operation} timed out after {timeout_ms} ms"
                )))
            }
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<CreateUserResponse, Error> {
        self.bounded("create user", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let row = NewUserRow {
                id: *user.id.as_uuid(),
                username: user.username.as_ref(),
            };

            let id = diesel::insert_into(users::table)
                .values(&row)
                .returning(users::id)
                .get_result::<Uuid>(&mut conn)
                .await
                .map_err(|err| map_write_error(err, "create user"))?;

            Ok(CreateUserResponse {
                user_id: UserId::from_uuid(id),
            })
        })
        .await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, Error> {
        let id = *id.as_uuid();
        self.bounded("find user by id", async move {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let row: UserRow = users::table
                .filter(users::id.eq(id))
                .select(UserRow::as_select())
                .first(&mut conn)
                .await
                .map_err(|err| map_read_error(err, "find user by id"))?;
            Ok(row.into())
        })
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<User, Error> {
        self.bounded("find user by username", async {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            let row: UserRow = users::table
                .filter(users::username.eq(username))
                .select(UserRow::as_select())
                .first(&mut conn)
                .await
                .map_err(|err| map_read_error(err, "find user by username"))?;
            Ok(row.into())
        })
        .await
    }
}
