//! # Money Module
//!
//! Provides the `Money` type used for item prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES ARRIVE AS JSON NUMBERS, BUT ARE STORED AS CENTS                 │
//! │                                                                         │
//! │  Client sends:   { "price": 3.355 }                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Money::from_decimal(3.355) ──► format "{:.2}" ──► "3.35" ──► 335 cents │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stored: Money(335)          Sent back: { "price": 3.35 }               │
//! │                                                                         │
//! │  A stored price can never carry more than two decimals.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! The binary value of the float is rounded to the nearest cent, exactly as
//! two-decimal string formatting does. `3.355` is really `3.35499999...` in
//! binary, so it becomes `3.35`; `1.299` becomes `1.30`.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_decimal(2.208).unwrap();
//! assert_eq!(price.cents(), 221);
//! assert_eq!(price.to_string(), "$2.21");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest absolute decimal amount accepted from the wire.
///
/// Keeps `value * 100` well inside the exactly-representable integer range
/// of an `f64`.
const MAX_DECIMAL: f64 = 1e13;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative input is representable so validation can
///   name it, instead of failing to decode
/// - **Decimal wire form**: serializes as a JSON number (`3.35`), not cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(346); // $3.46
    /// assert_eq!(price.cents(), 346);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding to the cent.
    ///
    /// Returns `None` for NaN, infinities, and amounts too large to store.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(3.355).unwrap().cents(), 335);
    /// assert_eq!(Money::from_decimal(6.493).unwrap().cents(), 649);
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() >= MAX_DECIMAL {
            return None;
        }

        // Round through the two-decimal text form; the result is then an
        // integer number of cents up to float noise, which round() removes.
        let rounded: f64 = format!("{:.2}", value).parse().ok()?;
        Some(Money((rounded * 100.0).round() as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount (for the wire only).
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$D.CC`, for logs and error messages.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value).ok_or_else(|| {
            de::Error::custom(format!("price {} is out of range", value))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
