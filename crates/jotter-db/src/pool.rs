//! Postgres connection pool.
//!
//! Only the pool size is tunable; acquire, idle and lifetime limits come
//! from [`jotter_core::defaults`].

use std::time::{Duration, Instant};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info, warn};

use jotter_core::{defaults, Error, Result};

/// Sizing for the note store's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
}

impl PoolConfig {
    /// Pool of at most `max_connections`, never fewer than one.
    pub fn new(max_connections: u32) -> Self {
        Self {
            max_connections: max_connections.max(1),
        }
    }

    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(defaults::DB_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(defaults::DB_IDLE_TIMEOUT_SECS))
            .max_lifetime(Duration::from_secs(defaults::DB_MAX_LIFETIME_SECS))
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(defaults::DB_MAX_CONNECTIONS)
    }
}

/// Open a pool against `database_url`. Fails if no connection can be made.
pub async fn create_pool(database_url: &str, config: PoolConfig) -> Result<PgPool> {
    let start = Instant::now();
    let pool = config
        .options()
        .connect(database_url)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = "db",
        component = "pool",
        op = "connect",
        max_connections = config.max_connections,
        pool_size = pool.size(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Database pool ready"
    );
    Ok(pool)
}

/// Log pool occupancy; warns when every connection is checked out.
pub fn log_pool_metrics(pool: &PgPool) {
    let size = pool.size();
    let idle = pool.num_idle();
    debug!(
        subsystem = "db",
        component = "pool",
        op = "metrics",
        pool_size = size,
        pool_idle = idle,
        "Pool occupancy"
    );
    if size > 0 && idle == 0 {
        warn!(
            subsystem = "db",
            component = "pool",
            pool_size = size,
            "No idle database connections"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pool_size() {
        assert_eq!(
            PoolConfig::default().max_connections,
            defaults::DB_MAX_CONNECTIONS
        );
    }

    #[test]
    fn test_zero_connections_is_raised_to_one() {
        assert_eq!(PoolConfig::new(0).max_connections, 1);
    }

    #[test]
    fn test_options_carry_size_and_fixed_timeouts() {
        let options = PoolConfig::new(4).options();
        assert_eq!(options.get_max_connections(), 4);
        assert_eq!(
            options.get_acquire_timeout(),
            Duration::from_secs(defaults::DB_ACQUIRE_TIMEOUT_SECS)
        );
        assert_eq!(
            options.get_idle_timeout(),
            Some(Duration::from_secs(defaults::DB_IDLE_TIMEOUT_SECS))
        );
    }
}
