//! # stockroom-db: Database Layer for Stockroom
//!
//! Durable product storage on SQLite via sqlx, plus the first-run seeder.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  CatalogView (apps/stockroom)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│ (product.rs)  │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────▲───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  │                        ┌───────┴───────┐                       │   │
//! │  │                        │    Seeder     │                       │   │
//! │  │                        │   (seed.rs)   │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockroom.db (SQLite, WAL)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig, Seeder};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//! let seeder = Seeder::new(db.products());
//! seeder.seed_if_empty().await?;
//! let newest_first = db.products().list_recent().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, StoreLocation};
pub use repository::product::ProductRepository;
pub use seed::{SeedOutcome, SeedState, Seeder, SEED_BATCH_SIZE};
