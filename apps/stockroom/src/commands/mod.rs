//! # Commands Module
//!
//! Everything the presentation layer calls.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Flow                                      │
//! │                                                                         │
//! │  Presentation (CLI table today)                                         │
//! │         │                                                               │
//! │         │  on_add_submit(&mut view, ProductForm { name, price, qty })   │
//! │         ▼                                                               │
//! │  commands::product                                                      │
//! │    1. ProductForm::validate  ──► VALIDATION_ERROR                       │
//! │    2. CatalogView operation  ──► NOT_FOUND / STORAGE_FAILURE            │
//! │    3. DTO (camelCase JSON)                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<ProductDto | PageDto, ApiError>                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the state they need: the catalog commands borrow
//! `CatalogView`, display formatting reads `ConfigState`.

pub mod product;
