//! # State Module
//!
//! Application state, split into focused types instead of one `AppState`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   DbState    │  │   CatalogView    │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Database    │  │  all records     │  │  database_path   │          │
//! │  │  Seeder      │  │  filtered        │  │  currency_symbol │          │
//! │  │  (in-flight  │  │  query, page     │  │                  │          │
//! │  │   flag)      │  │                  │  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • DbState: pool is thread-safe, seeder flag sits behind a Mutex       │
//! │  • CatalogView: mutated through &mut, one caller at a time             │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod db;

pub use catalog::CatalogView;
pub use config::ConfigState;
pub use db::DbState;
