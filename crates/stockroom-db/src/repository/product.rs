//! # Product Repository
//!
//! Durable storage of product records, keyed by an auto-incremented id.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert(fields)        → new id (never reused)                         │
//! │  bulk_insert([fields]) → one transaction, all or nothing               │
//! │  update(product)       → NotFound if the id is absent                  │
//! │  delete(id)            → absent id is a no-op                          │
//! │  count()               → number of rows                                │
//! │  list_recent()         → every row, newest (highest id) first          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is its own durability unit. Nothing is retried.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, Product, ProductId};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.insert(&fields).await?;
/// let newest_first = repo.list_recent().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a product and returns the id the store assigned to it.
    pub async fn insert(&self, fields: &NewProduct) -> DbResult<ProductId> {
        debug!(name = %fields.name(), "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price_cents, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(fields.name())
        .bind(fields.price().cents())
        .bind(fields.quantity())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Inserts many products in a single transaction.
    ///
    /// ## Atomicity
    /// ```text
    /// BEGIN
    ///   INSERT × N      ── any failure ──► ROLLBACK (tx dropped), 0 rows kept
    /// COMMIT            ── success ──────► N rows visible at once
    /// ```
    ///
    /// ## Returns
    /// Number of rows inserted.
    pub async fn bulk_insert(&self, batch: &[NewProduct]) -> DbResult<usize> {
        debug!(count = batch.len(), "Bulk inserting products");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        for fields in batch {
            sqlx::query(
                r#"
                INSERT INTO products (name, price_cents, quantity)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(fields.name())
            .bind(fields.price().cents())
            .bind(fields.quantity())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(batch.len())
    }

    /// Replaces every field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3,
                quantity = ?4
            WHERE id = ?1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.quantity)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// Deleting an id that doesn't exist is not an error.
    ///
    /// ## Returns
    /// Whether a row was removed.
    pub async fn delete(&self, id: ProductId) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, quantity
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts stored products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Lists every product, newest first (id descending).
    ///
    /// This ordering is the canonical "all records" order of the catalog.
    pub async fn list_recent(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, quantity
            FROM products
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::Money;

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn fields(name: &str, cents: i64, qty: i64) -> NewProduct {
        NewProduct::new(name, Money::from_cents(cents), qty).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;

        let a = repo.insert(&fields("A", 100, 1)).await.unwrap();
        let b = repo.insert(&fields("B", 200, 2)).await.unwrap();

        assert!(b > a);
        assert_eq!(repo.count().await.unwrap(), 2);

        let stored = repo.get_by_id(b).await.unwrap().unwrap();
        assert_eq!(stored, fields("B", 200, 2).into_product(b));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;

        let a = repo.insert(&fields("A", 100, 1)).await.unwrap();
        assert!(repo.delete(a).await.unwrap());

        let b = repo.insert(&fields("B", 100, 1)).await.unwrap();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_list_recent_is_id_descending() {
        let repo = repo().await;
        for i in 0..5 {
            repo.insert(&fields(&format!("P{}", i), 100, 1)).await.unwrap();
        }

        let ids: Vec<ProductId> = repo.list_recent().await.unwrap().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = repo().await;
        let id = repo.insert(&fields("Widget", 999, 5)).await.unwrap();

        let edited = fields("Gadget", 1250, 0).into_product(id);
        repo.update(&edited).await.unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(edited));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;

        let ghost = fields("Ghost", 1, 1).into_product(404);
        let err = repo.update(&ghost).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = repo().await;
        repo.insert(&fields("Widget", 999, 5)).await.unwrap();

        assert!(!repo.delete(12345).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bulk_insert_commits_all() {
        let repo = repo().await;
        let batch: Vec<NewProduct> = (0..50)
            .map(|i| fields(&format!("Item {}", i), i * 10, i % 7))
            .collect();

        assert_eq!(repo.bulk_insert(&batch).await.unwrap(), 50);
        assert_eq!(repo.count().await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_bulk_insert_is_all_or_nothing() {
        let repo = repo().await;

        // Make the engine reject the middle row of the batch
        sqlx::query(
            r#"
            CREATE TRIGGER reject_poison BEFORE INSERT ON products
            WHEN NEW.name = 'Poison'
            BEGIN
                SELECT RAISE(ABORT, 'poisoned row');
            END
            "#,
        )
        .execute(&repo.pool)
        .await
        .unwrap();

        let batch = vec![fields("A", 1, 1), fields("Poison", 2, 2), fields("B", 3, 3)];
        let err = repo.bulk_insert(&batch).await.unwrap_err();

        assert!(err.is_storage_failure());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_bypassed_validation() {
        let repo = repo().await;
        let id = repo.insert(&fields("Widget", 999, 5)).await.unwrap();

        let bad = Product {
            id,
            name: "Widget".to_string(),
            price_cents: -1,
            quantity: 5,
        };
        let err = repo.update(&bad).await.unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().price_cents, 999);
    }
}
