//! # Database State
//!
//! Owns the `Database` connection and the one `Seeder` bound to it.
//!
//! The seeder's in-flight flag only guards callers that share the same
//! `Seeder`, so it lives here next to the pool instead of being built
//! per call.
//!
//! ## Usage
//! ```rust,ignore
//! let db_state = DbState::new(db);
//! db_state.seeder().seed_if_empty().await?;
//! let view = CatalogView::load(db_state.inner().products()).await?;
//! ```

use stockroom_db::{Database, Seeder};

/// Database connection plus its first-run seeder.
#[derive(Debug)]
pub struct DbState {
    db: Database,
    seeder: Seeder,
}

impl DbState {
    /// Wraps the database and binds a seeder to its product table.
    pub fn new(db: Database) -> Self {
        let seeder = Seeder::new(db.products());
        DbState { db, seeder }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    pub fn seeder(&self) -> &Seeder {
        &self.seeder
    }
}
