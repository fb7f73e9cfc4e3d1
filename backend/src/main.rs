//! Backend entry-point: loads configuration, prepares storage and serves the
//! REST API, the claim feed and the OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use leaderboard::inbound::http::health::HealthState;
use leaderboard::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use leaderboard::settings::LeaderboardSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = LeaderboardSettings::load()
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let mut config = ServerConfig::new(settings.bind_addr(), settings.feed_capacity());

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            let applied = run_pending_migrations(database_url)
                .await
                .wrap_err("failed to apply database migrations")?;
            info!(applied, "database migrations applied");
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await
        .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    {
        let prometheus = server::metrics::make_metrics().map_err(|err| eyre!(err))?;
        config = config.with_metrics(Some(prometheus));
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = %settings.bind_addr(), "starting leaderboard server");
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}
