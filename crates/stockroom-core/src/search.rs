//! # Search Predicate
//!
//! Decides whether a product matches the text typed into the search box.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  query = ""        → every product matches                             │
//! │                                                                         │
//! │  otherwise a product matches when ANY of:                              │
//! │    name      contains query   (case-insensitive)                       │
//! │    "9.99"    contains query   (price text, literal)                    │
//! │    "5"       contains query   (quantity text, literal)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The query is NOT trimmed: `" "` only matches names containing a space.

use crate::types::Product;

/// A compiled search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        SearchQuery { raw, lowered }
    }

    /// The text as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Applies the predicate to one product.
    ///
    /// ```rust
    /// use stockroom_core::{Product, SearchQuery};
    ///
    /// let p = Product { id: 1, name: "Blue Widget".into(), price_cents: 1999, quantity: 42 };
    /// assert!(SearchQuery::new("widget").matches(&p));
    /// assert!(SearchQuery::new("19.9").matches(&p));
    /// assert!(SearchQuery::new("4").matches(&p));
    /// assert!(!SearchQuery::new("gadget").matches(&p));
    /// ```
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return true;
        }

        product.name.to_lowercase().contains(&self.lowered)
            || product.price().to_string().contains(&self.raw)
            || product.quantity.to_string().contains(&self.raw)
    }

    /// Returns the matching products, preserving their order.
    pub fn filter(&self, products: &[Product]) -> Vec<Product> {
        if self.is_empty() {
            return products.to_vec();
        }

        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}
