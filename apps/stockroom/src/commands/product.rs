//! # Product Commands
//!
//! Entry points the presentation layer calls when the user acts on the
//! product table, the add/edit form, the search box or the pager.
//!
//! ## Command Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User action            Command               CatalogView              │
//! │  ───────────            ───────               ───────────              │
//! │  Submit "Add" form ───► on_add_submit ──────► add_record               │
//! │  Click "Edit" ────────► edit_form ──────────► record (pre-fill)        │
//! │  Submit "Edit" form ──► on_edit_submit ─────► edit_record              │
//! │  Click "Delete" ──────► on_delete_request ──► delete_record            │
//! │  Type in search ──────► on_search_input ────► set_search_query         │
//! │  Click prev/next ─────► on_page_request ────► set_page                 │
//! │  Render table ────────► current_page ───────► current_page_slice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Form text is parsed and validated here, before anything reaches the
//! store. A rejected command leaves the view unchanged, so the form can
//! stay open with the user's input.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CatalogView;
use stockroom_core::validation::validate_product_id;
use stockroom_core::{Product, ProductForm, ProductId};

/// Product DTO (Data Transfer Object) for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    /// Price as shown in the table, e.g. "9.99".
    pub price: String,
    pub price_cents: i64,
    pub quantity: i64,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name.clone(),
            price: p.price().to_string(),
            price_cents: p.price_cents,
            quantity: p.quantity,
        }
    }
}

/// One rendered page of the product table plus pager state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub products: Vec<ProductDto>,
    pub current_page: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Number of records matching the search query.
    pub total_items: usize,
    pub search_query: String,
    /// Whether to render the pager at all.
    pub show_controls: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<&CatalogView> for PageDto {
    fn from(view: &CatalogView) -> Self {
        PageDto {
            products: view.current_page_slice().iter().map(ProductDto::from).collect(),
            current_page: view.current_page(),
            page_count: view.page_count(),
            page_size: view.page_size(),
            total_items: view.filtered_records().len(),
            search_query: view.search_query().to_string(),
            show_controls: view.shows_page_controls(),
            has_previous: view.has_previous_page(),
            has_next: view.has_next_page(),
        }
    }
}

/// Creates a product from the add form.
///
/// ## Returns
/// The stored product, with its new id. The view is back on page 1 with
/// the search cleared, so the product is the first row.
pub async fn on_add_submit(
    view: &mut CatalogView,
    form: ProductForm,
) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(name = %form.name, "on_add_submit command");

    let fields = form.validate()?;
    let product = view.add_record(fields).await?;

    info!(
        id = product.id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Product created"
    );
    Ok(ProductDto::from(&product))
}

/// Returns the edit form pre-filled with a cached product.
pub fn edit_form(view: &CatalogView, id: ProductId) -> Result<ProductForm, ApiError> {
    view.record(id)
        .map(ProductForm::from)
        .ok_or_else(|| ApiError::not_found("Product", &id.to_string()))
}

/// Saves the edit form over an existing product.
///
/// ## Errors
/// - `VALIDATION_ERROR` for bad form input or a non-positive id
/// - `NOT_FOUND` when the id isn't in the store
pub async fn on_edit_submit(
    view: &mut CatalogView,
    id: ProductId,
    form: ProductForm,
) -> Result<ProductDto, ApiError> {
    let start = Instant::now();
    debug!(id, name = %form.name, "on_edit_submit command");

    validate_product_id(id)?;
    let product = form.validate()?.into_product(id);
    let dto = ProductDto::from(&product);
    view.edit_record(product).await?;

    info!(
        id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Product updated"
    );
    Ok(dto)
}

/// Deletes a product. Unknown ids succeed without changes.
pub async fn on_delete_request(view: &mut CatalogView, id: ProductId) -> Result<(), ApiError> {
    debug!(id, "on_delete_request command");
    view.delete_record(id).await?;
    Ok(())
}

/// Applies the search box text and returns the page to render.
pub fn on_search_input(view: &mut CatalogView, text: impl Into<String>) -> PageDto {
    view.set_search_query(text);
    PageDto::from(&*view)
}

/// Moves to a page and returns it.
///
/// Only pages the pager offers (`1..=page_count`) are expected. Anything
/// else renders an empty table rather than failing.
pub fn on_page_request(view: &mut CatalogView, page: usize) -> PageDto {
    debug!(page, "on_page_request command");
    view.set_page(page);
    PageDto::from(&*view)
}

/// The page currently shown.
pub fn current_page(view: &CatalogView) -> PageDto {
    PageDto::from(view)
}
