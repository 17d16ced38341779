//! Backend entry-point: configuration from the environment, migrations, and
//! server startup.

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{self, DbPool, PoolConfig};
use backend::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(bind_addr)
        .with_openweather_api_key(env::var("OPENWEATHER_API_KEY").ok())
        .with_openai_api_key(env::var("OPENAI_API_KEY").ok());

    if let Ok(database_url) = env::var("DATABASE_URL") {
        let applied = persistence::run_pending_migrations(database_url.clone())
            .await
            .map_err(std::io::Error::other)?;
        if applied > 0 {
            info!(applied, "applied pending migrations");
        }
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    } else {
        warn!("DATABASE_URL not set, records will not survive restarts");
    }

    info!(addr = %config.bind_addr(), "starting server");
    create_server(config)?.await
}
