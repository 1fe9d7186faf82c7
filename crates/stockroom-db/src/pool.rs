//! # Database Handle
//!
//! Opens the product store and hands out repositories.
//!
//! ## Opening the Store
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Database::new(config)                            │
//! │                                                                         │
//! │  StoreLocation::File(path) ──► create file if missing, WAL journal     │
//! │  StoreLocation::InMemory  ──► private in-memory database, 1 connection │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  SqlitePool ──► run_migrations (schema version 1)                      │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  db.products() ──► ProductRepository (shares the pool)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The app is single-user, so the pool is small. A busy timeout covers the
//! case of a second process (e.g. the `seed` binary) holding the write lock.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Where the product store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A database file, created on first open.
    File(PathBuf),
    /// A throwaway database that disappears with the pool.
    InMemory,
}

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/stockroom.db")
///     .max_connections(2)
///     .busy_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub location: StoreLocation,

    /// Default: 4
    pub max_connections: u32,

    /// How long a statement waits on a locked file before failing.
    /// Default: 5 seconds
    pub busy_timeout: Duration,

    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Configuration for a database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            location: StoreLocation::File(path.into()),
            max_connections: 4,
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    /// Configuration for an isolated in-memory database.
    ///
    /// Each call yields a fresh database. The pool keeps exactly one
    /// connection so the data lives as long as the pool.
    pub fn in_memory() -> Self {
        DbConfig {
            location: StoreLocation::InMemory,
            max_connections: 1,
            busy_timeout: Duration::from_secs(5),
            run_migrations: true,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = match &self.location {
            StoreLocation::File(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal),
            StoreLocation::InMemory => SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?,
        };

        Ok(options.busy_timeout(self.busy_timeout))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to an open product store.
///
/// Clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the store and brings its schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        match &config.location {
            StoreLocation::File(path) => {
                info!(path = %path.display(), "Opening product store")
            }
            StoreLocation::InMemory => debug!("Opening in-memory product store"),
        }

        let options = config.connect_options()?;
        let in_memory = config.location == StoreLocation::InMemory;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(if in_memory { 1 } else { 0 })
            // An in-memory database dies with its last connection
            .idle_timeout(if in_memory { None } else { Some(Duration::from_secs(600)) })
            .max_lifetime(if in_memory { None } else { Some(Duration::from_secs(1800)) })
            .connect_with(options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Pool ready");

        let db = Database { pool };
        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Opens a database file with default settings.
    pub async fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Database::new(DbConfig::new(path.as_ref())).await
    }

    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Returns `(total, applied)` migration counts.
    pub async fn migration_status(&self) -> DbResult<(usize, usize)> {
        migrations::migration_status(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over the `products` table.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Closes the pool. Later calls through any clone or repository fail
    /// with a storage failure.
    pub async fn close(&self) {
        info!("Closing product store");
        self.pool.close().await;
    }

    /// True while the store answers queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
