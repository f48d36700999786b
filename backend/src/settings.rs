//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional config file, environment
//! variables prefixed `USER_SERVICE_` and command-line flags.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:80";

/// Invalid or missing settings detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No database connection string was supplied.
    #[error("USER_SERVICE_POSTGRES_DSN must be set")]
    MissingPostgresDsn,
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value}: {message}")]
    InvalidBindAddr {
        /// Configured text.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Configuration for the user service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServiceSettings {
    /// PostgreSQL connection string. Required.
    pub postgres_dsn: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept warm.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Upper bound on a single repository call, in milliseconds.
    #[ortho_config(default = 5_000)]
    pub query_timeout_ms: u64,
}

impl ServiceSettings {
    /// Return the database connection string.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingPostgresDsn`] when unset or blank.
    pub fn postgres_dsn(&self) -> Result<&str, SettingsError> {
        self.postgres_dsn
            .as_deref()
            .map(str::trim)
            .filter(|dsn| !dsn.is_empty())
            .ok_or(SettingsError::MissingPostgresDsn)
    }

    /// Return the listen address, defaulting to `0.0.0.0:80`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the per-call repository timeout.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Build the connection pool configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingPostgresDsn`] when no DSN is set.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let mut config = PoolConfig::new(self.postgres_dsn()?);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.pool_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(secs) = self.pool_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
