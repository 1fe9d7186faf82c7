//! # First-Run Seeder
//!
//! Fills an empty store with a fixed batch of sample products, once.
//!
//! ## Startup Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      seed_if_empty()                                    │
//! │                                                                         │
//! │  state == InProgress? ──yes──► InFlight (no-op)                        │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  state = InProgress  (guard resets to Idle on every exit path)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  count() > 0? ──yes──► AlreadyPopulated(count)                         │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  bulk_insert(1000 samples)  ← one transaction                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Seeded(1000)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-flight state belongs to the `Seeder` value. It only guards
//! callers sharing that value, not other processes opening the same file.
//! Because the batch is a single transaction, a failed seed leaves the
//! store empty and the next startup tries again.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use stockroom_core::validation::ValidationResult;
use stockroom_core::{Money, NewProduct};

/// Number of sample products written into an empty store.
pub const SEED_BATCH_SIZE: usize = 1000;

const ADJECTIVES: &[&str] = &[
    "Awesome",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Practical",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
    "Unbranded",
];

const MATERIALS: &[&str] = &[
    "Bronze", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Metal", "Plastic", "Rubber",
    "Soft", "Steel", "Wooden",
];

const NOUNS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Fish",
    "Gloves", "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes",
    "Soap", "Table", "Towels", "Tuna",
];

/// Lowest and highest generated price, in cents (1.00 .. 999.99).
const MIN_PRICE_CENTS: u64 = 100;
const MAX_PRICE_CENTS: u64 = 99_999;

/// Generated quantities fall in `1..=MAX_SAMPLE_QUANTITY`.
const MAX_SAMPLE_QUANTITY: u64 = 100;

// =============================================================================
// State
// =============================================================================

/// Whether a seed run is currently executing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedState {
    #[default]
    Idle,
    InProgress,
}

/// What a call to [`Seeder::seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many records were committed.
    Seeded(usize),
    /// The store already held this many records; nothing was written.
    AlreadyPopulated(i64),
    /// Another call on this seeder was still running; nothing was done.
    InFlight,
}

/// Resets the seeder to `Idle` when dropped.
struct SeedGuard<'a> {
    state: &'a Mutex<SeedState>,
}

impl Drop for SeedGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = SeedState::Idle;
    }
}

// =============================================================================
// Seeder
// =============================================================================

/// One-time bootstrap populator for an empty store.
#[derive(Debug)]
pub struct Seeder {
    products: ProductRepository,
    state: Mutex<SeedState>,
}

impl Seeder {
    pub fn new(products: ProductRepository) -> Self {
        Seeder {
            products,
            state: Mutex::new(SeedState::Idle),
        }
    }

    /// Current in-flight state.
    pub fn state(&self) -> SeedState {
        *self.lock_state()
    }

    fn lock_state(&self) -> MutexGuard<'_, SeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips `Idle` to `InProgress`, or returns `None` if already running.
    fn try_begin(&self) -> Option<SeedGuard<'_>> {
        let mut state = self.lock_state();
        if *state == SeedState::InProgress {
            return None;
        }
        *state = SeedState::InProgress;
        Some(SeedGuard { state: &self.state })
    }

    /// Seeds the store if, and only if, it is empty right now.
    ///
    /// ## Errors
    /// Storage errors from `count` or `bulk_insert` are returned as-is.
    /// The state is back to `Idle` afterwards either way.
    pub async fn seed_if_empty(&self) -> DbResult<SeedOutcome> {
        let Some(_guard) = self.try_begin() else {
            debug!("Seeding already in progress, skipping");
            return Ok(SeedOutcome::InFlight);
        };

        let existing = self.products.count().await?;
        if existing > 0 {
            debug!(existing, "Store already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        let batch = sample_batch(SEED_BATCH_SIZE).map_err(|e| DbError::Internal(e.to_string()))?;

        match self.products.bulk_insert(&batch).await {
            Ok(inserted) => {
                info!(inserted, "Database seeded with sample products");
                Ok(SeedOutcome::Seeded(inserted))
            }
            Err(e) => {
                warn!(error = %e, "Seeding failed");
                Err(e)
            }
        }
    }
}

// =============================================================================
// Sample Data
// =============================================================================

/// SplitMix64 finalizer: spreads consecutive indexes over the whole range.
fn mix(index: u64) -> u64 {
    let mut z = index.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn pick<'a>(words: &[&'a str], roll: u64) -> &'a str {
    words[(roll % words.len() as u64) as usize]
}

/// Builds the sample product at `index`.
///
/// Deterministic: the same index always yields the same product.
pub fn sample_product(index: usize) -> ValidationResult<NewProduct> {
    let roll = mix(index as u64);

    let name = format!(
        "{} {} {}",
        pick(ADJECTIVES, roll),
        pick(MATERIALS, roll >> 8),
        pick(NOUNS, roll >> 16),
    );
    let price_cents = MIN_PRICE_CENTS + (roll >> 24) % (MAX_PRICE_CENTS - MIN_PRICE_CENTS + 1);
    let quantity = 1 + (roll >> 44) % MAX_SAMPLE_QUANTITY;

    NewProduct::new(name, Money::from_cents(price_cents as i64), quantity as i64)
}

/// Builds `count` sample products.
pub fn sample_batch(count: usize) -> ValidationResult<Vec<NewProduct>> {
    (0..count).map(sample_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn seeder() -> (Database, Seeder) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let seeder = Seeder::new(db.products());
        (db, seeder)
    }

    #[test]
    fn test_sample_products_are_valid() {
        let batch = sample_batch(SEED_BATCH_SIZE).unwrap();
        assert_eq!(batch.len(), SEED_BATCH_SIZE);

        for fields in &batch {
            assert!(!fields.name().is_empty());
            assert!(fields.price().cents() >= MIN_PRICE_CENTS as i64);
            assert!(fields.price().cents() <= MAX_PRICE_CENTS as i64);
            assert!((1..=100).contains(&fields.quantity()));
        }
    }

    #[test]
    fn test_sample_product_is_deterministic() {
        assert_eq!(sample_product(17).unwrap(), sample_product(17).unwrap());
    }

    #[test]
    fn test_samples_vary() {
        let batch = sample_batch(50).unwrap();
        let first = &batch[0];
        assert!(batch.iter().any(|p| p.name() != first.name()));
        assert!(batch.iter().any(|p| p.quantity() != first.quantity()));
    }

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let (db, seeder) = seeder().await;

        let outcome = seeder.seed_if_empty().await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded(SEED_BATCH_SIZE));
        assert_eq!(db.products().count().await.unwrap(), 1000);
        assert_eq!(seeder.state(), SeedState::Idle);
    }

    #[tokio::test]
    async fn test_second_check_does_not_reseed() {
        let (db, seeder) = seeder().await;

        seeder.seed_if_empty().await.unwrap();
        let outcome = seeder.seed_if_empty().await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated(1000));
        assert_eq!(db.products().count().await.unwrap(), 1000);
    }

    #[tokio::test]
    async fn test_fresh_seeder_on_populated_store_does_not_reseed() {
        let (db, seeder) = seeder().await;
        seeder.seed_if_empty().await.unwrap();

        let restarted = Seeder::new(db.products());
        let outcome = restarted.seed_if_empty().await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated(1000));
        assert_eq!(db.products().count().await.unwrap(), 1000);
    }

    #[tokio::test]
    async fn test_reentry_while_in_flight_is_noop() {
        let (db, seeder) = seeder().await;

        let guard = seeder.try_begin().unwrap();
        assert_eq!(seeder.state(), SeedState::InProgress);

        let outcome = seeder.seed_if_empty().await.unwrap();
        assert_eq!(outcome, SeedOutcome::InFlight);
        assert_eq!(db.products().count().await.unwrap(), 0);

        drop(guard);
        assert_eq!(seeder.state(), SeedState::Idle);
        assert_eq!(
            seeder.seed_if_empty().await.unwrap(),
            SeedOutcome::Seeded(SEED_BATCH_SIZE)
        );
    }

    #[tokio::test]
    async fn test_concurrent_checks_seed_once() {
        let (db, seeder) = seeder().await;

        let (first, second) = tokio::join!(seeder.seed_if_empty(), seeder.seed_if_empty());
        let mut outcomes = vec![first.unwrap(), second.unwrap()];
        outcomes.sort_by_key(|o| matches!(o, SeedOutcome::InFlight));

        assert_eq!(
            outcomes,
            vec![SeedOutcome::Seeded(SEED_BATCH_SIZE), SeedOutcome::InFlight]
        );
        assert_eq!(db.products().count().await.unwrap(), 1000);
        assert_eq!(seeder.state(), SeedState::Idle);
    }

    #[tokio::test]
    async fn test_failure_clears_in_flight_state() {
        let (db, seeder) = seeder().await;
        db.close().await;

        let err = seeder.seed_if_empty().await.unwrap_err();

        assert!(err.is_storage_failure());
        assert_eq!(seeder.state(), SeedState::Idle);
    }

    #[tokio::test]
    async fn test_failed_batch_leaves_store_empty() {
        let (db, seeder) = seeder().await;
        sqlx::query(
            r#"
            CREATE TRIGGER reject_late_rows BEFORE INSERT ON products
            WHEN (SELECT COUNT(*) FROM products) >= 500
            BEGIN
                SELECT RAISE(ABORT, 'disk full');
            END
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        assert!(seeder.seed_if_empty().await.is_err());
        assert_eq!(db.products().count().await.unwrap(), 0);
        assert_eq!(seeder.state(), SeedState::Idle);
    }
}
