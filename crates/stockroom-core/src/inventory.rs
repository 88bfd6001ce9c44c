//! # Inventory Store
//!
//! The ordered, in-memory collection of items and every operation that reads
//! or mutates it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Inventory Operations                             │
//! │                                                                         │
//! │  Read                          Write                                    │
//! │  ────                          ─────                                    │
//! │  items()                       insert(item)          ──► append         │
//! │  find_by_code(code)            insert_batch(items)   ──► all or nothing │
//! │  find_by_name(name)            upsert_by_name(item)  ──► merge / append │
//! │  find_by_search_value(v)       delete_by_code(code)  ──► close the gap  │
//! │  get(v) → NotFound             update_item_info(..)  ──► in place       │
//! │                                increase_quantities() ──► plan, commit   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Codes are unique under case-insensitive comparison
//! - Insertion order is kept; a delete shifts later items left
//! - A code never changes once stored
//! - Prices are whole cents (guaranteed by [`Money`](crate::money::Money))
//!
//! ## Concurrency
//! `Inventory` is a plain owned value. Callers that share it across tasks
//! must hold one lock for the whole duration of each call.

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Attribute, Item, ItemInfoUpdate, NewItem, QuantityIncrease};
use crate::validation::{is_valid_code, keys_match, validate_new_item, validate_price};

/// What `upsert_by_name` did with the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An item with the same name existed and was merged into.
    Merged,
    /// No item had that name; a new one was appended.
    Created,
}

/// The inventory catalog.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{Inventory, Money, NewItem};
///
/// let mut inventory = Inventory::demo_catalog();
/// assert!(inventory.delete_by_code("a12t-4gh7-qpl9-3n4m"));
///
/// inventory
///     .insert(NewItem::new("M4N5-F0C3-F4gk-si00", "Tomato", Money::from_decimal(3.355).unwrap()))
///     .unwrap();
///
/// let tomato = inventory.find_by_search_value("ToMaTo").unwrap();
/// assert_eq!(tomato.price.cents(), 335);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Creates an inventory from a bootstrap list, validated like a batch.
    pub fn with_items(items: Vec<NewItem>) -> CoreResult<Self> {
        let mut inventory = Inventory::new();
        inventory.insert_batch(items)?;
        Ok(inventory)
    }

    /// The demonstration catalog the server seeds at startup.
    ///
    /// | Code                  | Name         | Price |
    /// |-----------------------|--------------|-------|
    /// | `A12T-4GH7-QPL9-3N4M` | Lettuce      | 3.46  |
    /// | `E5T6-9UI3-TH15-QR88` | Peach        | 2.99  |
    /// | `YRT6-72AS-K736-L4AR` | Green Pepper | 0.79  |
    /// | `TQ4C-VV6T-75ZX-1RMR` | Gala Apple   | 3.59  |
    pub fn demo_catalog() -> Self {
        Inventory {
            items: vec![
                seed_item(
                    "A12T-4GH7-QPL9-3N4M",
                    "Lettuce",
                    346,
                    12,
                    &[Attribute::Organic, Attribute::LocallySourced],
                ),
                seed_item("E5T6-9UI3-TH15-QR88", "Peach", 299, 30, &[Attribute::Vegan]),
                seed_item("YRT6-72AS-K736-L4AR", "Green Pepper", 79, 45, &[]),
                seed_item("TQ4C-VV6T-75ZX-1RMR", "Gala Apple", 359, 60, &[Attribute::Organic]),
            ],
        }
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position_by_code(&self, code: &str) -> Option<usize> {
        self.items.iter().position(|item| keys_match(&item.code, code))
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| keys_match(&item.name, name))
    }

    /// Finds the item with this code (case-insensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&Item> {
        self.position_by_code(code).map(|index| &self.items[index])
    }

    /// Finds the first item with this name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.position_by_name(name).map(|index| &self.items[index])
    }

    /// Looks `value` up by code if it has the code shape, by name otherwise.
    pub fn find_by_search_value(&self, value: &str) -> Option<&Item> {
        if is_valid_code(value) {
            self.find_by_code(value)
        } else {
            self.find_by_name(value)
        }
    }

    /// Like [`find_by_search_value`](Self::find_by_search_value), but a miss
    /// is reported as `ItemNotFound`.
    pub fn get(&self, search_value: &str) -> CoreResult<&Item> {
        self.find_by_search_value(search_value)
            .ok_or_else(|| CoreError::ItemNotFound(search_value.to_string()))
    }

    // =========================================================================
    // Insert Operations
    // =========================================================================

    /// Full insert validation: own fields, then uniqueness against the store
    /// and against `pending` (items accepted earlier in the same batch).
    fn validate_insert(&self, item: &NewItem, pending: &[Item]) -> Result<(), ValidationError> {
        validate_new_item(item)?;

        let taken = self.find_by_code(&item.code).is_some()
            || pending.iter().any(|accepted| keys_match(&accepted.code, &item.code));

        if taken {
            return Err(ValidationError::DuplicateCode {
                code: item.code.clone(),
            });
        }

        Ok(())
    }

    /// Validates and appends one item.
    pub fn insert(&mut self, item: NewItem) -> CoreResult<&Item> {
        self.validate_insert(&item, &[])?;

        info!(code = %item.code, name = %item.name, price = %item.price, "Item added");
        self.items.push(item.into_item());

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Validates every item, then appends them all, or none.
    ///
    /// Duplicates are checked against the store plus the items accepted
    /// earlier in this batch. Returns the number of items appended.
    pub fn insert_batch(&mut self, items: Vec<NewItem>) -> CoreResult<usize> {
        let mut accepted: Vec<Item> = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            if let Err(source) = self.validate_insert(&item, &accepted) {
                debug!(index, error = %source, "Batch rejected");
                return Err(CoreError::BatchRejected { index, source });
            }
            accepted.push(item.into_item());
        }

        let count = accepted.len();
        self.items.extend(accepted);

        info!(count, total = self.items.len(), "Batch added");
        Ok(count)
    }

    /// Merges into the item with the same name, or appends a new one.
    ///
    /// ## Merge Path
    /// - quantity: existing + incoming
    /// - attributes and price: replaced
    /// - code and name: kept as stored
    ///
    /// ## Create Path
    /// Same validation as [`insert`](Self::insert).
    pub fn upsert_by_name(&mut self, item: NewItem) -> CoreResult<UpsertOutcome> {
        let Some(index) = self.position_by_name(&item.name) else {
            self.insert(item)?;
            return Ok(UpsertOutcome::Created);
        };

        validate_price(item.price)?;

        let existing = &mut self.items[index];
        let quantity = existing
            .quantity
            .checked_add(item.quantity)
            .ok_or_else(|| CoreError::QuantityOverflow {
                code: existing.code.clone(),
            })?;

        existing.attributes = item.attributes;
        existing.price = item.price;
        existing.quantity = quantity;

        info!(code = %existing.code, quantity, "Item merged by name");
        Ok(UpsertOutcome::Merged)
    }

    // =========================================================================
    // Update / Delete Operations
    // =========================================================================

    /// Removes the item with this code. Returns false if none matched.
    pub fn delete_by_code(&mut self, code: &str) -> bool {
        match self.position_by_code(code) {
            Some(index) => {
                let removed = self.items.remove(index);
                info!(code = %removed.code, index, "Item deleted");
                true
            }
            None => {
                debug!(code = %code, "Delete matched nothing");
                false
            }
        }
    }

    /// Replaces attributes and price of the item with this code.
    ///
    /// Code, name and quantity are left untouched.
    pub fn update_item_info(&mut self, code: &str, update: ItemInfoUpdate) -> CoreResult<&Item> {
        let index = self
            .position_by_code(code)
            .ok_or_else(|| CoreError::ItemNotFound(code.to_string()))?;

        validate_price(update.price)?;

        let item = self.items.get_mut(index).ok_or_else(|| {
            CoreError::InternalInconsistency(format!("item {} vanished during update", code))
        })?;

        item.attributes = update.attributes;
        item.price = update.price;

        info!(code = %item.code, price = %item.price, "Item info updated");
        Ok(&*item)
    }

    /// Adds `delta` to the quantity of every listed item, or to none.
    ///
    /// ## Two Phases
    /// ```text
    /// plan:   resolve every code, compute every new quantity (no writes)
    ///           │
    ///           ├── unknown code ──► ItemNotFound, inventory unchanged
    ///           ├── overflow     ──► QuantityOverflow, inventory unchanged
    ///           ▼
    /// commit: write all planned quantities
    /// ```
    ///
    /// A code listed twice gets both increments.
    pub fn increase_quantities(&mut self, requests: &[QuantityIncrease]) -> CoreResult<()> {
        let mut planned: Vec<(usize, u64)> = Vec::with_capacity(requests.len());

        for request in requests {
            let index = self
                .position_by_code(&request.code)
                .ok_or_else(|| CoreError::ItemNotFound(request.code.clone()))?;

            let current = planned
                .iter()
                .rev()
                .find(|(planned_index, _)| *planned_index == index)
                .map(|(_, quantity)| *quantity)
                .unwrap_or(self.items[index].quantity);

            let next = current
                .checked_add(request.delta)
                .ok_or_else(|| CoreError::QuantityOverflow {
                    code: self.items[index].code.clone(),
                })?;

            planned.push((index, next));
        }

        for (index, quantity) in planned {
            self.items[index].quantity = quantity;
        }

        info!(count = requests.len(), "Quantities increased");
        Ok(())
    }
}

/// Builds one demo catalog entry.
fn seed_item(code: &str, name: &str, cents: i64, quantity: u64, attributes: &[Attribute]) -> Item {
    Item {
        code: code.to_string(),
        name: name.to_string(),
        attributes: attributes.iter().copied().collect(),
        price: Money::from_cents(cents),
        quantity,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price(value: f64) -> Money {
        Money::from_decimal(value).unwrap()
    }

    fn codes(inventory: &Inventory) -> Vec<&str> {
        inventory.items().iter().map(|item| item.code.as_str()).collect()
    }

    fn tomato() -> NewItem {
        NewItem::new("M4N5-F0C3-F4gk-si00", "Tomato", price(3.355))
    }

    #[test]
    fn test_demo_catalog_order() {
        let inventory = Inventory::demo_catalog();
        let names: Vec<&str> = inventory.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Lettuce", "Peach", "Green Pepper", "Gala Apple"]);
    }

    #[test]
    fn test_find_by_code_ignores_case() {
        let inventory = Inventory::demo_catalog();
        let item = inventory.find_by_code("a12t-4gh7-qpl9-3n4m").unwrap();
        assert_eq!(item.name, "Lettuce");
        assert_eq!(item.code, "A12T-4GH7-QPL9-3N4M");
    }

    #[test]
    fn test_find_by_search_value_dispatch() {
        let inventory = Inventory::demo_catalog();

        assert_eq!(inventory.find_by_search_value("green PEPPER").unwrap().code, "YRT6-72AS-K736-L4AR");
        assert_eq!(inventory.find_by_search_value("tq4c-vv6t-75zx-1rmr").unwrap().name, "Gala Apple");

        assert!(inventory.find_by_search_value("Peaches").is_none());
        assert!(inventory.find_by_search_value("E5T6-9UI3-TH15-QR88-").is_none());
    }

    #[test]
    fn test_get_reports_not_found() {
        let inventory = Inventory::demo_catalog();
        assert_eq!(
            inventory.get("tomatoe"),
            Err(CoreError::ItemNotFound("tomatoe".to_string()))
        );
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut inventory = Inventory::new();
        inventory.insert(NewItem::new("AAAA-AAAA-AAAA-AAAA", "Basil", price(1.0))).unwrap();
        inventory.insert(NewItem::new("BBBB-BBBB-BBBB-BBBB", "basil", price(2.0))).unwrap();

        assert_eq!(inventory.find_by_name("BASIL").unwrap().code, "AAAA-AAAA-AAAA-AAAA");
    }

    #[test]
    fn test_insert_appends_rounded_price() {
        let mut inventory = Inventory::demo_catalog();
        let stored = inventory.insert(tomato()).unwrap().clone();

        assert_eq!(stored.price.cents(), 335);
        assert_eq!(inventory.items().last(), Some(&stored));
        assert_eq!(inventory.len(), 5);
    }

    #[test]
    fn test_insert_rejects_duplicate_code_in_any_case() {
        let mut inventory = Inventory::demo_catalog();
        let result = inventory.insert(NewItem::new("e5t6-9ui3-th15-qr88", "potato", price(0.49)));

        assert_eq!(
            result,
            Err(CoreError::Validation(ValidationError::DuplicateCode {
                code: "e5t6-9ui3-th15-qr88".to_string()
            }))
        );
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_insert_rejects_each_bad_case() {
        let good = NewItem::new("b6N3-C5X3-Z0F6-2K0J", "potato", price(0.49));
        let bad_cases = vec![
            NewItem { name: String::new(), ..good.clone() },
            NewItem { code: String::new(), ..good.clone() },
            NewItem { price: Money::zero(), ..good.clone() },
            NewItem { code: format!("{}-", good.code), ..good.clone() },
            NewItem { code: "E5T6-9UI3-TH15-QR88".to_string(), ..good.clone() },
        ];

        for bad in bad_cases {
            let mut inventory = Inventory::demo_catalog();
            assert!(inventory.insert(bad).is_err());
            assert_eq!(inventory, Inventory::demo_catalog());
        }
    }

    #[test]
    fn test_insert_batch_appends_in_order() {
        let mut inventory = Inventory::demo_catalog();
        let added = inventory
            .insert_batch(vec![
                NewItem::new("F4J6-D4M2-J0G5-G3E5", "Pickle", price(1.299)),
                NewItem::new("0g44-gm33-4jf9-FGM4", "Broccoli", price(2.208)),
                NewItem::new("1A2S-3F5G-6HJ7-4R6V", "Chicken Breast", price(6.493)),
            ])
            .unwrap();

        assert_eq!(added, 3);
        let tail: Vec<i64> = inventory.items()[4..].iter().map(|i| i.price.cents()).collect();
        assert_eq!(tail, vec![130, 221, 649]);
    }

    #[test]
    fn test_insert_batch_is_all_or_nothing() {
        let mut inventory = Inventory::demo_catalog();
        let result = inventory.insert_batch(vec![
            NewItem::new("F4J6-D4M2-J0G5-G3E5", "Pickle", price(1.299)),
            NewItem::new("0g44-gm33-4jf9-FGM4", "", price(2.208)),
        ]);

        assert_eq!(
            result,
            Err(CoreError::BatchRejected {
                index: 1,
                source: ValidationError::MissingField { field: "name" },
            })
        );
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_insert_batch_detects_duplicates_within_batch() {
        let mut inventory = Inventory::new();
        let result = inventory.insert_batch(vec![
            NewItem::new("F4J6-D4M2-J0G5-G3E5", "Pickle", price(1.3)),
            NewItem::new("f4j6-d4m2-j0g5-g3e5", "Relish", price(2.0)),
        ]);

        assert!(matches!(
            result,
            Err(CoreError::BatchRejected {
                index: 1,
                source: ValidationError::DuplicateCode { .. }
            })
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_with_items_validates() {
        assert!(Inventory::with_items(vec![NewItem::new("bad", "x", price(1.0))]).is_err());

        let inventory = Inventory::with_items(vec![tomato()]).unwrap();
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_delete_closes_gap() {
        let mut inventory = Inventory::demo_catalog();

        assert!(inventory.delete_by_code("a12T-4Gh7-QPl9-3n4M"));
        assert_eq!(
            codes(&inventory),
            vec!["E5T6-9UI3-TH15-QR88", "YRT6-72AS-K736-L4AR", "TQ4C-VV6T-75ZX-1RMR"]
        );

        assert!(inventory.delete_by_code("YRT6-72AS-K736-L4AR"));
        assert_eq!(codes(&inventory), vec!["E5T6-9UI3-TH15-QR88", "TQ4C-VV6T-75ZX-1RMR"]);
    }

    #[test]
    fn test_delete_unknown_code_is_noop() {
        let mut inventory = Inventory::demo_catalog();
        assert!(!inventory.delete_by_code("Th1s-P1Dd-N0t3-X1ST"));
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_update_item_info_keeps_identity_and_quantity() {
        let mut inventory = Inventory::demo_catalog();
        let update = ItemInfoUpdate {
            attributes: [Attribute::Vegan, Attribute::FairTrade].into_iter().collect(),
            price: price(3.109),
        };

        let updated = inventory.update_item_info("e5t6-9ui3-th15-qr88", update).unwrap().clone();

        assert_eq!(updated.code, "E5T6-9UI3-TH15-QR88");
        assert_eq!(updated.name, "Peach");
        assert_eq!(updated.quantity, 30);
        assert_eq!(updated.price.cents(), 311);
        assert!(updated.attributes.contains(&Attribute::FairTrade));
        assert_eq!(inventory.items()[1], updated);
    }

    #[test]
    fn test_update_item_info_errors() {
        let mut inventory = Inventory::demo_catalog();
        let update = ItemInfoUpdate {
            attributes: Default::default(),
            price: price(1.0),
        };
        assert_eq!(
            inventory.update_item_info("Th1s-P1Dd-N0t3-X1ST", update.clone()),
            Err(CoreError::ItemNotFound("Th1s-P1Dd-N0t3-X1ST".to_string()))
        );

        let free = ItemInfoUpdate {
            price: Money::zero(),
            ..update
        };
        assert!(matches!(
            inventory.update_item_info("E5T6-9UI3-TH15-QR88", free),
            Err(CoreError::Validation(ValidationError::MissingField { field: "price" }))
        ));
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_upsert_merges_quantity_and_keeps_code() {
        let mut inventory = Inventory::demo_catalog();
        let incoming = NewItem::new("ZZZZ-ZZZZ-ZZZZ-ZZZZ", "PEACH", price(3.49))
            .with_quantity(5)
            .with_attributes([Attribute::Organic]);

        assert_eq!(inventory.upsert_by_name(incoming).unwrap(), UpsertOutcome::Merged);

        let peach = inventory.find_by_name("peach").unwrap();
        assert_eq!(peach.code, "E5T6-9UI3-TH15-QR88");
        assert_eq!(peach.name, "Peach");
        assert_eq!(peach.quantity, 35);
        assert_eq!(peach.price.cents(), 349);
        assert_eq!(peach.attributes.iter().copied().collect::<Vec<_>>(), vec![Attribute::Organic]);
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_upsert_creates_when_name_is_new() {
        let mut inventory = Inventory::demo_catalog();
        assert_eq!(inventory.upsert_by_name(tomato()).unwrap(), UpsertOutcome::Created);
        assert_eq!(inventory.items().last().unwrap().name, "Tomato");

        let mut inventory = Inventory::demo_catalog();
        let bad = NewItem::new("nope", "Radish", price(1.0));
        assert!(inventory.upsert_by_name(bad).is_err());
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_increase_quantities_applies_all() {
        let mut inventory = Inventory::demo_catalog();
        inventory
            .increase_quantities(&[
                QuantityIncrease { code: "a12t-4gh7-qpl9-3n4m".into(), delta: 3 },
                QuantityIncrease { code: "TQ4C-VV6T-75ZX-1RMR".into(), delta: 10 },
                QuantityIncrease { code: "A12T-4GH7-QPL9-3N4M".into(), delta: 1 },
            ])
            .unwrap();

        assert_eq!(inventory.find_by_name("Lettuce").unwrap().quantity, 16);
        assert_eq!(inventory.find_by_name("Gala Apple").unwrap().quantity, 70);
        assert_eq!(inventory.find_by_name("Peach").unwrap().quantity, 30);
    }

    #[test]
    fn test_increase_quantities_unknown_code_changes_nothing() {
        let mut inventory = Inventory::demo_catalog();
        let result = inventory.increase_quantities(&[
            QuantityIncrease { code: "A12T-4GH7-QPL9-3N4M".into(), delta: 3 },
            QuantityIncrease { code: "Th1s-P1Dd-N0t3-X1ST".into(), delta: 1 },
            QuantityIncrease { code: "E5T6-9UI3-TH15-QR88".into(), delta: 2 },
        ]);

        assert_eq!(result, Err(CoreError::ItemNotFound("Th1s-P1Dd-N0t3-X1ST".to_string())));
        assert_eq!(inventory, Inventory::demo_catalog());
    }

    #[test]
    fn test_increase_quantities_overflow_changes_nothing() {
        let mut inventory = Inventory::demo_catalog();
        let result = inventory.increase_quantities(&[
            QuantityIncrease { code: "E5T6-9UI3-TH15-QR88".into(), delta: 1 },
            QuantityIncrease { code: "A12T-4GH7-QPL9-3N4M".into(), delta: u64::MAX },
        ]);

        assert!(matches!(result, Err(CoreError::QuantityOverflow { .. })));
        assert_eq!(inventory, Inventory::demo_catalog());
    }
}
