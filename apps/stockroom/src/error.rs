//! # Error Types
//!
//! `CatalogError` is what the catalog operations return; `ApiError` is the
//! serializable shape handed to the presentation layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  ProductForm::validate ── ValidationError ──┐                           │
//! │                                             ▼                           │
//! │  ProductRepository ─────── DbError ───► CatalogError ───► ApiError      │
//! │                            │               │                  │         │
//! │              NotFound ─────┘──► NotFound   │                  │         │
//! │              anything else ───► StorageFailure                │         │
//! │                                                               ▼         │
//! │                                  { "code": "NOT_FOUND", "message": ...} │
//! │                                                                         │
//! │  On any error the in-memory view is left exactly as it was.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use stockroom_core::ValidationError;
use stockroom_db::DbError;

// =============================================================================
// Catalog Error
// =============================================================================

/// Failures of catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// User input was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An update referenced an id the store doesn't hold.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The storage engine failed (I/O, quota, corruption, closed pool).
    #[error("Storage failure: {0}")]
    StorageFailure(#[source] DbError),
}

impl From<DbError> for CatalogError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CatalogError::NotFound { entity, id },
            other => CatalogError::StorageFailure(other),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from presentation-facing commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price has invalid format: must be a decimal number",
///   "field": "price"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Form field to highlight, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Storage engine failed
    StorageFailure,

    /// Anything else (bad CLI usage, unreadable config)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(err: &ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            field: Some(err.field().to_string()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(&err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(e) => ApiError::validation(&e),
            CatalogError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            CatalogError::StorageFailure(e) => {
                // Log the engine detail, show a generic message
                tracing::error!(error = %e, "Storage failure");
                ApiError::new(ErrorCode::StorageFailure, "Saving to local storage failed")
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::from(CatalogError::from(err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
