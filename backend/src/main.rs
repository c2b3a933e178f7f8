//! Server entry-point: loads settings, prepares storage and serves the API.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hobbies_api::inbound::http::health::HealthState;
use hobbies_api::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use hobbies_api::settings::AppSettings;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr: SocketAddr = settings.bind_addr.parse().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid bind address {}: {e}", settings.bind_addr),
        )
    })?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url.as_deref() {
        run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections))
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    info!(
        bind_addr = %config.bind_addr(),
        database = config.uses_database(),
        "starting server"
    );
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
