//! # Catalog View
//!
//! The in-memory projection of the store that the presentation layer reads.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          CatalogView                                    │
//! │                                                                         │
//! │   ProductRepository ──list_recent()──► all       (newest first)         │
//! │                                         │                               │
//! │                            query.filter │                               │
//! │                                         ▼                               │
//! │                                       filtered   (subset, same order)   │
//! │                                         │                               │
//! │                     Pagination(current_page, 10)                        │
//! │                                         ▼                               │
//! │                                 current_page_slice()                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Order
//! Every mutation writes to the store first. The cached lists are only
//! touched once the write succeeded, so a failed call leaves the view
//! exactly as it was.
//!
//! ```text
//! add_record ─► insert ─ok─► prepend to all ─► clear query, page 1 ─► re-filter
//!                  └─err─► return error (cache untouched)
//! ```

use tracing::{debug, info};

use crate::error::CatalogResult;
use stockroom_core::{NewProduct, Pagination, Product, ProductId, SearchQuery, PAGE_SIZE};
use stockroom_db::ProductRepository;

/// Cached, filtered and paginated view of the product store.
///
/// ## Invariants
/// - `filtered` is exactly the records of `all` matching `query`, in the
///   same relative order
/// - `all` holds the same ids as the store for everything this process
///   has loaded or written
#[derive(Debug)]
pub struct CatalogView {
    products: ProductRepository,
    all: Vec<Product>,
    filtered: Vec<Product>,
    query: SearchQuery,
    current_page: usize,
    page_size: usize,
}

impl CatalogView {
    /// Creates an empty view on page 1. Call [`refresh`](Self::refresh) to load it.
    pub fn new(products: ProductRepository) -> Self {
        CatalogView {
            products,
            all: Vec::new(),
            filtered: Vec::new(),
            query: SearchQuery::default(),
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }

    /// Creates a view and loads it from the store.
    pub async fn load(products: ProductRepository) -> CatalogResult<Self> {
        let mut view = CatalogView::new(products);
        view.refresh().await?;
        Ok(view)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Reloads every record from the store and reapplies the current query.
    pub async fn refresh(&mut self) -> CatalogResult<()> {
        let records = self.products.list_recent().await?;
        self.all = records;
        self.reapply_query();

        info!(
            total = self.all.len(),
            filtered = self.filtered.len(),
            "Catalog refreshed"
        );
        Ok(())
    }

    /// Replaces the search query and re-filters.
    ///
    /// Changing the text moves the view back to page 1. Re-submitting the
    /// same text keeps the current page.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = SearchQuery::new(query);
        if query != self.query {
            self.current_page = 1;
        }
        self.query = query;
        self.reapply_query();

        debug!(
            query = self.query.as_str(),
            matches = self.filtered.len(),
            "Search query applied"
        );
    }

    /// Persists a new product and puts it at the top of the list.
    ///
    /// Clears the search query and returns to page 1 so the new record is
    /// the first row shown.
    pub async fn add_record(&mut self, fields: NewProduct) -> CatalogResult<Product> {
        let id = self.products.insert(&fields).await?;
        let product = fields.into_product(id);

        self.all.insert(0, product.clone());
        self.query = SearchQuery::default();
        self.current_page = 1;
        self.reapply_query();

        debug!(id, total = self.all.len(), "Product added to catalog");
        Ok(product)
    }

    /// Persists new field values for an existing product.
    ///
    /// The cached entry is replaced in place. Whether it still shows in
    /// the filtered list depends on the active query.
    ///
    /// ## Errors
    /// `NotFound` when the store has no record with this id.
    pub async fn edit_record(&mut self, product: Product) -> CatalogResult<()> {
        self.products.update(&product).await?;

        let id = product.id;
        match self.all.iter_mut().find(|p| p.id == id) {
            Some(slot) => *slot = product,
            None => debug!(id, "Edited product is not cached"),
        }
        self.reapply_query();

        debug!(id, "Product edited in catalog");
        Ok(())
    }

    /// Deletes a product from the store and the cache.
    ///
    /// An unknown id is a no-op.
    pub async fn delete_record(&mut self, id: ProductId) -> CatalogResult<()> {
        let removed = self.products.delete(id).await?;

        self.all.retain(|p| p.id != id);
        self.filtered.retain(|p| p.id != id);

        debug!(id, removed, "Product deleted from catalog");
        Ok(())
    }

    /// Moves to page `page`.
    ///
    /// Not range-checked: a page past the end renders as an empty slice.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Records shown on the current page.
    pub fn current_page_slice(&self) -> &[Product] {
        self.pagination().slice(&self.filtered)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn all_records(&self) -> &[Product] {
        &self.all
    }

    pub fn filtered_records(&self) -> &[Product] {
        &self.filtered
    }

    pub fn search_query(&self) -> &str {
        self.query.as_str()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Looks up a cached record, e.g. to pre-fill the edit form.
    pub fn record(&self, id: ProductId) -> Option<&Product> {
        self.all.iter().find(|p| p.id == id)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.page_size, self.filtered.len())
    }

    pub fn page_count(&self) -> usize {
        self.pagination().page_count()
    }

    pub fn shows_page_controls(&self) -> bool {
        self.pagination().shows_controls()
    }

    pub fn has_previous_page(&self) -> bool {
        self.pagination().has_previous()
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination().has_next()
    }

    fn reapply_query(&mut self) {
        self.filtered = self.query.filter(&self.all);
    }
}
