//! # Validation Module
//!
//! Identity rules and field validation for inventory items.
//!
//! ## Key Comparison
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   One Fold For Every Comparison                         │
//! │                                                                         │
//! │  lookup by code ──┐                                                     │
//! │  lookup by name ──┼──► keys_match(a, b) ──► normalize(a) == normalize(b)│
//! │  duplicate check ─┤                                                     │
//! │  delete by code ──┘                                                     │
//! │                                                                         │
//! │  Stored values are never rewritten; only comparisons are folded.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Order
//! `validate_new_item` reports the first failure in this order:
//! 1. missing code, missing name, missing price (zero counts as missing)
//! 2. negative price
//! 3. malformed code
//!
//! Duplicate detection needs the store and runs last, in
//! [`Inventory`](crate::inventory::Inventory).

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Number of characters in each hyphen-separated group of a code.
const CODE_GROUP_LEN: usize = 4;

/// Number of groups in a code.
const CODE_GROUPS: usize = 4;

// =============================================================================
// Key Folding
// =============================================================================

/// Folds a key to a single case for comparison purposes.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::normalize;
///
/// assert_eq!(normalize("a12T-4Gh7"), normalize("A12T-4GH7"));
/// ```
pub fn normalize(key: &str) -> String {
    key.to_lowercase()
}

/// Case-insensitive key equality built on [`normalize`].
pub fn keys_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

// =============================================================================
// Code Format
// =============================================================================

/// Returns true iff `code` is four groups of four ASCII letters or digits
/// joined by hyphens.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::is_valid_code;
///
/// assert!(is_valid_code("M4N5-F0C3-F4gk-si00"));
/// assert!(!is_valid_code("M4N5-F0C3-F4gk-si00-"));
/// assert!(!is_valid_code("Tomato"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    let groups: Vec<&str> = code.split('-').collect();

    groups.len() == CODE_GROUPS
        && groups.iter().all(|group| {
            group.len() == CODE_GROUP_LEN && group.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a price supplied by a caller.
///
/// Zero is treated exactly like an absent price.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_zero() {
        return Err(ValidationError::MissingField { field: "price" });
    }

    if price.is_negative() {
        return Err(ValidationError::NegativePrice { field: "price" });
    }

    Ok(())
}

/// Validates an item name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }

    Ok(())
}

/// Validates a new item's own fields (everything except uniqueness).
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    if item.code.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "code" });
    }

    validate_name(&item.name)?;
    validate_price(item.price)?;

    if !is_valid_code(&item.code) {
        return Err(ValidationError::MalformedCode {
            code: item.code.clone(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
