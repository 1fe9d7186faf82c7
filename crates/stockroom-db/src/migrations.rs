//! # Schema Migrations
//!
//! The `products` schema is embedded in the binary and applied on open.
//!
//! ```text
//! migrations/sqlite/
//! └── 001_products.sql   products(id, name, price_cents, quantity)
//!                        + indexes on name, price_cents, quantity
//! ```
//!
//! Only schema version 1 exists. Applying it to a store that already has
//! it is a no-op, so this runs on every startup.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies any migration the store hasn't seen yet.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    let (total, applied) = match migration_status(pool).await {
        Ok(status) => status,
        // Fresh file: the bookkeeping table doesn't exist yet
        Err(_) => (MIGRATOR.migrations.len(), 0),
    };

    if applied >= total {
        debug!(applied, "Schema up to date");
        return Ok(());
    }

    MIGRATOR.run(pool).await?;
    info!(from = applied, to = total, "Schema migrated");
    Ok(())
}

/// Returns `(total, applied)` migration counts.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await?;

    Ok((MIGRATOR.migrations.len(), applied as usize))
}
