//! # Domain Types
//!
//! The product record and the shapes it takes on its way into the store.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product Lifecycle                               │
//! │                                                                         │
//! │  ┌─────────────────┐   validate   ┌─────────────────┐                  │
//! │  │  ProductForm    │ ───────────► │   NewProduct    │                  │
//! │  │  ─────────────  │              │  ─────────────  │                  │
//! │  │  name: String   │              │  name (trimmed) │                  │
//! │  │  price: String  │              │  price: Money   │                  │
//! │  │  quantity: Str  │              │  quantity: i64  │                  │
//! │  └─────────────────┘              └────────┬────────┘                  │
//! │                                            │ store assigns id           │
//! │                                            ▼                            │
//! │                                   ┌─────────────────┐                  │
//! │                                   │    Product      │                  │
//! │                                   │  id: ProductId  │                  │
//! │                                   └─────────────────┘                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `NewProduct` has private fields, so every instance has passed validation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    parse_quantity, validate_price, validate_product_name, validate_quantity, ValidationResult,
};

/// Store-assigned identifier. Auto-incremented, never reused.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A persisted product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the store.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Builds a replacement record carrying this id and new field values.
    pub fn with_fields(&self, fields: NewProduct) -> Product {
        fields.into_product(self.id)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Validated product fields without an id.
///
/// ## Invariants
/// - `name` is trimmed and non-empty
/// - `price` is non-negative
/// - `quantity` is non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    name: String,
    price: Money,
    quantity: i64,
}

impl NewProduct {
    /// Validates and builds product fields.
    ///
    /// ```rust
    /// use stockroom_core::{Money, NewProduct};
    ///
    /// assert!(NewProduct::new("Widget", Money::from_cents(999), 5).is_ok());
    /// assert!(NewProduct::new("", Money::from_cents(999), 5).is_err());
    /// assert!(NewProduct::new("Widget", Money::from_cents(-1), 5).is_err());
    /// assert!(NewProduct::new("Widget", Money::from_cents(999), -5).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_quantity(quantity)?;

        Ok(NewProduct {
            name: name.trim().to_string(),
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Attaches a store-assigned id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price_cents: self.price.cents(),
            quantity: self.quantity,
        }
    }
}

/// Re-validates a stored record; `Product` fields are public and may hold anything.
impl TryFrom<&Product> for NewProduct {
    type Error = ValidationError;

    fn try_from(p: &Product) -> ValidationResult<Self> {
        NewProduct::new(p.name.as_str(), p.price(), p.quantity)
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw text as typed into the add/edit form.
///
/// ## Why Strings?
/// Form widgets hand over text. Parsing happens here, in one place,
/// so a bad price is reported as a field error rather than a type error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Parses and validates every field.
    ///
    /// Fields are checked in form order; the first failure is returned.
    pub fn validate(&self) -> ValidationResult<NewProduct> {
        validate_product_name(&self.name)?;
        let price: Money = self.price.parse()?;
        let quantity = parse_quantity(&self.quantity)?;
        NewProduct::new(self.name.as_str(), price, quantity)
    }
}

impl From<&Product> for ProductForm {
    /// Pre-fills the edit form.
    fn from(p: &Product) -> Self {
        ProductForm {
            name: p.name.clone(),
            price: p.price().to_string(),
            quantity: p.quantity.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_trims_name() {
        let fields = NewProduct::new("  Widget ", Money::from_cents(999), 5).unwrap();
        assert_eq!(fields.name(), "Widget");
        assert_eq!(fields.price().cents(), 999);
        assert_eq!(fields.quantity(), 5);
    }

    #[test]
    fn test_into_product_keeps_fields() {
        let product = NewProduct::new("Widget", Money::from_cents(999), 5)
            .unwrap()
            .into_product(42);
        assert_eq!(
            product,
            Product {
                id: 42,
                name: "Widget".to_string(),
                price_cents: 999,
                quantity: 5,
            }
        );
    }

    #[test]
    fn test_with_fields_keeps_id() {
        let original = NewProduct::new("Widget", Money::from_cents(999), 5)
            .unwrap()
            .into_product(7);
        let edited = original.with_fields(NewProduct::new("Gadget", Money::zero(), 0).unwrap());
        assert_eq!(edited.id, 7);
        assert_eq!(edited.name, "Gadget");
        assert_eq!(edited.price_cents, 0);
    }

    #[test]
    fn test_product_to_fields_is_validated() {
        let stored = Product {
            id: 3,
            name: "Widget".to_string(),
            price_cents: 999,
            quantity: 5,
        };
        let fields = NewProduct::try_from(&stored).unwrap();
        assert_eq!(stored.with_fields(fields), stored);

        let tampered = Product {
            id: 4,
            name: "   ".to_string(),
            price_cents: -500,
            quantity: -3,
        };
        let err = NewProduct::try_from(&tampered).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name".to_string() });

        let tampered = Product {
            name: "Widget".to_string(),
            ..tampered
        };
        assert_eq!(NewProduct::try_from(&tampered).unwrap_err().field(), "price");
    }

    #[test]
    fn test_form_validate() {
        let fields = ProductForm::new("Widget", "9.99", "5").validate().unwrap();
        assert_eq!(fields.price().cents(), 999);
        assert_eq!(fields.quantity(), 5);
    }

    #[test]
    fn test_form_reports_first_bad_field() {
        let err = ProductForm::new("", "abc", "x").validate().unwrap_err();
        assert_eq!(err.field(), "name");

        let err = ProductForm::new("Widget", "abc", "x").validate().unwrap_err();
        assert_eq!(err.field(), "price");

        let err = ProductForm::new("Widget", "1.00", "x").validate().unwrap_err();
        assert_eq!(err.field(), "quantity");

        let err = ProductForm::new("Widget", "-1.00", "1").validate().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_form_prefill_round_trips() {
        let product = Product {
            id: 3,
            name: "Widget".to_string(),
            price_cents: 1050,
            quantity: 2,
        };
        let form = ProductForm::from(&product);
        assert_eq!(form.price, "10.50");
        assert_eq!(form.validate().unwrap().into_product(3), product);
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            price_cents: 999,
            quantity: 5,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"priceCents\":999"));
    }
}
