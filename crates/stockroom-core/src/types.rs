//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     NewItem     │   │   Attribute     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (key)     │   │  all fields     │   │  organic        │       │
//! │  │  name (key #2)  │   │  optional on    │   │  grass-fed      │       │
//! │  │  attributes     │   │  the wire       │   │  vegan          │       │
//! │  │  price (Money)  │   │  (zero=missing) │   │  ...            │       │
//! │  │  quantity       │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │ ItemInfoUpdate  │   │QuantityIncrease │                              │
//! │  │  attributes     │   │  code           │                              │
//! │  │  price          │   │  delta          │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Lookup
//! Every item has:
//! - `code`: `XXXX-XXXX-XXXX-XXXX`, unique, never changes after insert
//! - `name`: secondary lookup key, not required to be unique

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Attribute
// =============================================================================

/// Descriptive qualifier tag attached to an item.
///
/// The set is closed: an unrecognized tag fails request decoding rather than
/// being stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    Organic,
    GrassFed,
    Vegan,
    Vegetarian,
    LocallySourced,
    GlutenFree,
    NonGmo,
    FreeRange,
    FairTrade,
    Kosher,
    Halal,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Attribute::Organic => "organic",
            Attribute::GrassFed => "grass-fed",
            Attribute::Vegan => "vegan",
            Attribute::Vegetarian => "vegetarian",
            Attribute::LocallySourced => "locally-sourced",
            Attribute::GlutenFree => "gluten-free",
            Attribute::NonGmo => "non-gmo",
            Attribute::FreeRange => "free-range",
            Attribute::FairTrade => "fair-trade",
            Attribute::Kosher => "kosher",
            Attribute::Halal => "halal",
        };
        f.write_str(tag)
    }
}

/// Attribute set of one item. Ordered, so responses are deterministic.
pub type Attributes = BTreeSet<Attribute>;

// =============================================================================
// Item
// =============================================================================

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Product code, `XXXX-XXXX-XXXX-XXXX`. Stored as given; compared
    /// case-insensitively.
    pub code: String,

    /// Display name, also a case-insensitive lookup key.
    pub name: String,

    /// Qualifier tags.
    #[serde(default)]
    pub attributes: Attributes,

    /// Unit price, always whole cents.
    pub price: Money,

    /// Units on hand.
    #[serde(default)]
    pub quantity: u64,
}

// =============================================================================
// Request Shapes
// =============================================================================

/// Payload for creating (or upserting) an item.
///
/// Every field defaults to its zero value, so an absent field and an
/// empty/zero one are treated the same by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewItem {
    /// Accepts the legacy wire name `pid` as well.
    #[serde(alias = "pid")]
    pub code: String,
    pub name: String,
    pub attributes: Attributes,
    pub price: Money,
    pub quantity: u64,
}

impl NewItem {
    /// Convenience constructor used by the demo catalog and tests.
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        NewItem {
            code: code.into(),
            name: name.into(),
            price,
            ..NewItem::default()
        }
    }

    /// Builder-style quantity setter.
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder-style attribute setter.
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes = attributes.into_iter().collect();
        self
    }

    /// Converts an already-validated payload into a stored item.
    pub(crate) fn into_item(self) -> Item {
        Item {
            code: self.code,
            name: self.name,
            attributes: self.attributes,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Payload for replacing an item's attributes and price.
///
/// Code, name and quantity are never touched by this update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfoUpdate {
    #[serde(default)]
    pub attributes: Attributes,
    pub price: Money,
}

/// One element of a quantity batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncrease {
    #[serde(alias = "pid")]
    pub code: String,
    pub delta: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_wire_names() {
        let json = serde_json::to_string(&Attribute::LocallySourced).unwrap();
        assert_eq!(json, "\"locally-sourced\"");
        assert_eq!(Attribute::GrassFed.to_string(), "grass-fed");

        let parsed: Attribute = serde_json::from_str("\"non-gmo\"").unwrap();
        assert_eq!(parsed, Attribute::NonGmo);
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let result = serde_json::from_str::<Attribute>("\"artisanal\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_item_missing_fields_default_to_zero() {
        let item: NewItem = serde_json::from_str(r#"{"name": "potato"}"#).unwrap();
        assert_eq!(item.code, "");
        assert!(item.price.is_zero());
        assert_eq!(item.quantity, 0);
        assert!(item.attributes.is_empty());
    }

    #[test]
    fn test_new_item_accepts_pid_alias() {
        let item: NewItem =
            serde_json::from_str(r#"{"pid": "B6N3-C5X3-Z0F6-2K0J", "name": "potato", "price": 0.49}"#)
                .unwrap();
        assert_eq!(item.code, "B6N3-C5X3-Z0F6-2K0J");
        assert_eq!(item.price.cents(), 49);
    }

    #[test]
    fn test_duplicate_attributes_collapse() {
        let item: NewItem =
            serde_json::from_str(r#"{"attributes": ["vegan", "organic", "vegan"]}"#).unwrap();
        let tags: Vec<Attribute> = item.attributes.into_iter().collect();
        assert_eq!(tags, vec![Attribute::Organic, Attribute::Vegan]);
    }

    #[test]
    fn test_item_info_update_requires_price() {
        assert!(serde_json::from_str::<ItemInfoUpdate>(r#"{"attributes": []}"#).is_err());
        let update: ItemInfoUpdate = serde_json::from_str(r#"{"price": 2.5}"#).unwrap();
        assert!(update.attributes.is_empty());
    }

    #[test]
    fn test_quantity_increase_rejects_negative_delta() {
        let result =
            serde_json::from_str::<QuantityIncrease>(r#"{"code": "A12T-4GH7-QPL9-3N4M", "delta": -3}"#);
        assert!(result.is_err());
    }
}
