//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Store operation failures                       │
//! │  └── ValidationError  - Rejected item fields                           │
//! │                                                                         │
//! │  stockroom-api errors (app crate)                                      │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP status + JSON     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcome Classes
//! | Error                          | Outcome       |
//! |--------------------------------|---------------|
//! | `Validation`, `BatchRejected`, `QuantityOverflow` | rejected request |
//! | `ItemNotFound`                 | not found     |
//! | `InternalInconsistency`        | server fault  |

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Inventory store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No item matches the given code or name.
    ///
    /// ## When This Occurs
    /// - Lookup by code/name found nothing
    /// - Delete or update targeted an unknown code
    /// - A quantity batch referenced an unknown code (nothing was applied)
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// A single item failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// One member of a batch failed validation; the whole batch was dropped.
    #[error("Batch rejected at item {index}: {source}")]
    BatchRejected {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Adding to a quantity would exceed the representable range.
    #[error("Quantity overflow for {code}")]
    QuantityOverflow { code: String },

    /// A key verified a moment ago could not be updated.
    ///
    /// This is a store invariant violation, never a client mistake.
    #[error("Inventory inconsistency: {0}")]
    InternalInconsistency(String),
}

impl CoreError {
    /// Returns true when the caller sent something the store rejects.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(_)
                | CoreError::BatchRejected { .. }
                | CoreError::QuantityOverflow { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Item field validation errors.
///
/// Checks run in a fixed order (missing → malformed → duplicate), so a
/// payload with several problems always reports the same one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, empty, or zero.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The product code does not match `XXXX-XXXX-XXXX-XXXX`.
    #[error("code '{code}' must be four groups of four letters or digits separated by hyphens")]
    MalformedCode { code: String },

    /// The product code already exists (case-insensitive).
    #[error("code '{code}' already exists")]
    DuplicateCode { code: String },

    /// Monetary values cannot be negative.
    #[error("{field} cannot be negative")]
    NegativePrice { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
