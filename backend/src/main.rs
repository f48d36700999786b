//! User service entry-point: loads settings, migrates the schema and serves
//! the REST endpoints with their OpenAPI docs.

mod server;

use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_service::outbound::persistence::{DbPool, run_migrations};
use user_service::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let dsn = settings.postgres_dsn()?;
    let bind_addr = settings.bind_addr()?;

    run_migrations(dsn)
        .await
        .wrap_err("failed to apply database migrations")?;
    let pool = DbPool::new(settings.pool_config()?)
        .await
        .wrap_err("failed to build connection pool")?;

    let config = ServerConfig::new(bind_addr, pool).with_query_timeout(settings.query_timeout());
    create_server(config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?
        .await
        .wrap_err("server terminated unexpectedly")
}
