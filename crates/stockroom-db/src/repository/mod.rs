//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  CatalogView / Seeder                                                  │
//! │       │                                                                 │
//! │       │  db.products().insert(&fields)                                 │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert / bulk_insert                                              │
//! │  ├── update / delete                                                   │
//! │  ├── count                                                             │
//! │  └── list_recent (id DESC)                                             │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
