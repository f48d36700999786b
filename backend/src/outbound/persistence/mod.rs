//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselUserRepository`] implementation of the domain
//! repository port, backed by `diesel-async` with `bb8` connection pooling.
//!
//! - Diesel row structs (`models.rs`) and the schema (`schema.rs`) stay
//!   internal to this module.
//! - Driver failures are translated into the domain taxonomy in
//!   `user_error_mapping.rs` before they leave the adapter.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;
mod user_error_mapping;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations, run_migrations_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
pub use user_error_mapping::USERNAME_UNIQUE_CONSTRAINT;
