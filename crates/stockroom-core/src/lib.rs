//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate holds the domain model of the inventory manager as pure
//! functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (table, form, pager)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ on_add_submit, on_search_input, ...    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              apps/stockroom (CatalogView, commands)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  search   │  │   page    │  │   │
//! │  │   │  Product  │  │   Money   │  │ predicate │  │ Pagination│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `NewProduct`, `ProductForm`
//! - [`money`] - Integer-cent prices
//! - [`validation`] - Field rules applied where user input enters
//! - [`search`] - The case-insensitive search predicate
//! - [`page`] - Pagination math over the filtered list
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Money, NewProduct, SearchQuery};
//!
//! let widget = NewProduct::new("Widget", Money::from_cents(999), 5).unwrap();
//! let product = widget.into_product(1);
//!
//! assert!(SearchQuery::new("WIDG").matches(&product));
//! assert!(SearchQuery::new("9.99").matches(&product));
//! ```

pub mod error;
pub mod money;
pub mod page;
pub mod search;
pub mod types;
pub mod validation;

// Re-exports so callers can write `stockroom_core::Money`
pub use error::ValidationError;
pub use money::Money;
pub use page::Pagination;
pub use search::SearchQuery;
pub use types::*;

/// Number of records shown per page in the catalog table.
pub const PAGE_SIZE: usize = 10;

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
