//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use user_service::outbound::persistence::{DbPool, DieselUserRepository};

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) query_timeout: Duration,
}

impl ServerConfig {
    /// Construct a configuration serving `db_pool` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
            query_timeout: DieselUserRepository::DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Bound each repository call by `query_timeout`.
    #[must_use]
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }
}
