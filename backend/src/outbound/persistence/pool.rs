//! Connection pool for the MySQL catalogue store.
//!
//! Wraps `sqlx::MySqlPool` so the rest of the adapter only sees [`DbPool`]
//! and [`PoolError`]. The pool connects lazily: the service starts while the
//! store is down and reports it through `/health`.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlPool};

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the store connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use catalogue::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("mysql://catalogue_user:pw@catalogue-db:3306/socksdb")
///     .with_max_size(20)
///     .with_acquire_timeout(Duration::from_secs(2));
/// assert_eq!(config.max_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    acquire_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration for `database_url`.
    ///
    /// Defaults: `max_size` 10, `acquire_timeout` 5 seconds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set how long a checkout may wait for a free connection.
    #[must_use]
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Get the maximum pool size.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Lazily connecting MySQL pool.
#[derive(Clone, Debug)]
pub struct DbPool {
    inner: MySqlPool,
}

impl DbPool {
    /// Build a pool from `config` without opening a connection.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` when the database URL cannot be parsed.
    pub fn new(config: &PoolConfig) -> Result<Self, PoolError> {
        let options: MySqlConnectOptions = config
            .database_url
            .parse()
            .map_err(|err: sqlx::Error| PoolError::build(err.to_string()))?;
        let inner = MySqlPoolOptions::new()
            .max_connections(config.max_size)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);
        Ok(Self { inner })
    }

    /// Check out a connection; it returns to the pool when dropped.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PoolConnection<MySql>, PoolError> {
        self.inner
            .acquire()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }

    /// Close every connection; further checkouts fail.
    pub async fn close(&self) {
        self.inner.close().await;
    }
}
