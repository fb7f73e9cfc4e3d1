//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `LEADERBOARD_*` environment variables, matching CLI
//! flags, or a configuration file. Without a database URL the server keeps
//! its state in memory.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the original service listened on.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 5000);
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_FEED_CAPACITY: usize = 64;

/// Configuration values controlling the server at start-up.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LEADERBOARD")]
pub struct LeaderboardSettings {
    /// Socket address to bind the HTTP server to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string; in-memory storage when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// Buffered notices per claim feed subscriber.
    pub feed_capacity: Option<usize>,
}

impl LeaderboardSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }

    pub fn feed_capacity(&self) -> usize {
        self.feed_capacity.unwrap_or(DEFAULT_FEED_CAPACITY).max(1)
    }
}
