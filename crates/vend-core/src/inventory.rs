//! # Inventory
//!
//! Per-slot stock tracking for the vending machine, plus the planogram
//! format that describes how a machine is stocked.
//!
//! Slots live in a `BTreeMap` keyed by slot id, so enumeration is always in
//! ascending slot order and listings cover exactly the populated slots — no
//! fixed display range.

use crate::error::{VendError, VendResult};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One storage position: a product and its remaining count.
///
/// Owned exclusively by `Inventory`; quantity only changes through
/// `Inventory::consume_one` and can never go negative (it is unsigned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Product stocked in this slot
    pub product: Product,

    /// Remaining quantity
    pub quantity: u32,
}

impl Slot {
    /// Create a slot holding `quantity` units of `product`
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// Slot-id-keyed store of products and quantities.
///
/// Absence of a slot id is a normal "nothing here" answer for the stock and
/// quantity probes; only `product()` treats it as an error, because the buy
/// path is expected to confirm stock before reading the product.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    slots: BTreeMap<u32, Slot>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the slot entry.
    ///
    /// Overwriting discards the prior product and quantity; there is no
    /// merge. Quantity 0 is legal and means "slot defined but empty".
    pub fn add_slot(&mut self, slot_id: u32, product: Product, quantity: u32) {
        self.slots.insert(slot_id, Slot::new(product, quantity));
    }

    /// True iff a slot exists at `slot_id` and has quantity > 0
    pub fn has_stock(&self, slot_id: u32) -> bool {
        self.slots
            .get(&slot_id)
            .map(|slot| slot.quantity > 0)
            .unwrap_or(false)
    }

    /// The product stocked at `slot_id`.
    ///
    /// Fails with `VendError::InvalidSlot` when no entry exists — callers
    /// on the buy path guard this with `has_stock` first, so an error here
    /// indicates a broken caller contract rather than an empty slot.
    pub fn product(&self, slot_id: u32) -> VendResult<&Product> {
        self.slots
            .get(&slot_id)
            .map(|slot| &slot.product)
            .ok_or(VendError::InvalidSlot { slot_id })
    }

    /// Decrement the slot's quantity by one if it has stock.
    ///
    /// Returns false (and changes nothing) when the slot is absent or
    /// already empty. Never fails.
    pub fn consume_one(&mut self, slot_id: u32) -> bool {
        match self.slots.get_mut(&slot_id) {
            Some(slot) if slot.quantity > 0 => {
                slot.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Stored quantity at `slot_id`, or 0 when the slot is absent
    pub fn quantity(&self, slot_id: u32) -> u32 {
        self.slots
            .get(&slot_id)
            .map(|slot| slot.quantity)
            .unwrap_or(0)
    }

    /// Iterate the populated slots (quantity > 0) in ascending slot order
    pub fn in_stock(&self) -> impl Iterator<Item = (u32, &Slot)> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.quantity > 0)
            .map(|(id, slot)| (*id, slot))
    }

    /// Number of defined slots, empty ones included
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// One planogram row: which slot gets which product, and how many units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanogramSlot {
    /// Slot identifier
    pub slot: u32,

    /// Product to stock
    pub product: Product,

    /// Units loaded
    pub quantity: u32,
}

/// Stocking plan for a machine (loaded from `config/planogram.toml`).
///
/// Duplicate slot ids are allowed and resolve last-write-wins, matching
/// `Inventory::add_slot` overwrite semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planogram {
    pub slots: Vec<PlanogramSlot>,
}

impl Planogram {
    /// Create an empty planogram
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Add a stocking entry
    pub fn add(&mut self, slot: u32, product: Product, quantity: u32) {
        self.slots.push(PlanogramSlot {
            slot,
            product,
            quantity,
        });
    }

    /// Parse a planogram from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Validate the plan: every price must be non-negative
    pub fn validate(&self) -> VendResult<()> {
        for entry in &self.slots {
            if entry.product.price.amount < 0 {
                return Err(VendError::InvalidPrice {
                    message: format!(
                        "product {} in slot {} has negative price",
                        entry.product.id, entry.slot
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Currency, Price};

    fn chips() -> Product {
        Product::new(101, "Chips", Price::new(30.0, Currency::INR))
    }

    fn coke() -> Product {
        Product::new(102, "Coke", Price::new(50.0, Currency::INR))
    }

    #[test]
    fn test_load_then_query_round_trip() {
        let mut inventory = Inventory::new();
        inventory.add_slot(5, chips(), 3);

        assert!(inventory.has_stock(5));
        assert_eq!(inventory.quantity(5), 3);
        assert_eq!(inventory.product(5).unwrap(), &chips());
    }

    #[test]
    fn test_absent_slot_is_zero_stock_not_error() {
        let inventory = Inventory::new();

        assert!(!inventory.has_stock(2));
        assert_eq!(inventory.quantity(2), 0);
    }

    #[test]
    fn test_product_of_absent_slot_is_invalid_slot() {
        let inventory = Inventory::new();

        match inventory.product(99) {
            Err(VendError::InvalidSlot { slot_id }) => assert_eq!(slot_id, 99),
            other => panic!("expected InvalidSlot, got {:?}", other),
        }
    }

    #[test]
    fn test_consume_decrements_until_empty() {
        let mut inventory = Inventory::new();
        inventory.add_slot(1, chips(), 2);

        assert!(inventory.consume_one(1));
        assert_eq!(inventory.quantity(1), 1);
        assert!(inventory.consume_one(1));
        assert_eq!(inventory.quantity(1), 0);

        // empty now: consume refuses and leaves the slot at zero
        assert!(!inventory.consume_one(1));
        assert_eq!(inventory.quantity(1), 0);
        assert!(!inventory.has_stock(1));
    }

    #[test]
    fn test_consume_absent_slot_is_noop() {
        let mut inventory = Inventory::new();
        assert!(!inventory.consume_one(7));
        assert_eq!(inventory.quantity(7), 0);
    }

    #[test]
    fn test_zero_quantity_slot_is_defined_but_empty() {
        let mut inventory = Inventory::new();
        inventory.add_slot(3, coke(), 0);

        assert!(!inventory.has_stock(3));
        assert_eq!(inventory.quantity(3), 0);
        // the slot exists, so reading its product is still legal
        assert_eq!(inventory.product(3).unwrap().name, "Coke");
    }

    #[test]
    fn test_overwrite_discards_prior_quantity() {
        let mut inventory = Inventory::new();
        inventory.add_slot(1, chips(), 5);
        inventory.add_slot(1, coke(), 2);

        assert_eq!(inventory.quantity(1), 2);
        assert_eq!(inventory.product(1).unwrap().name, "Coke");
    }

    #[test]
    fn test_in_stock_is_ascending_and_skips_empty() {
        let mut inventory = Inventory::new();
        inventory.add_slot(42, chips(), 1);
        inventory.add_slot(3, coke(), 0);
        inventory.add_slot(7, coke(), 4);

        let ids: Vec<u32> = inventory.in_stock().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![7, 42]);
        assert_eq!(inventory.slot_count(), 3);
    }

    #[test]
    fn test_planogram_toml_parse() {
        let toml_str = r#"
            [[slots]]
            slot = 1
            quantity = 5

            [slots.product]
            id = 101
            name = "Chips"
            price = { amount = 3000, currency = "inr" }
        "#;

        let planogram = Planogram::from_toml(toml_str).unwrap();
        assert_eq!(planogram.slots.len(), 1);
        assert_eq!(planogram.slots[0].slot, 1);
        assert_eq!(planogram.slots[0].quantity, 5);
        assert_eq!(planogram.slots[0].product, chips());
        assert!(planogram.validate().is_ok());
    }

    #[test]
    fn test_planogram_rejects_negative_price() {
        let mut planogram = Planogram::new();
        planogram.add(
            1,
            Product::new(9, "Broken", Price::from_minor(-100, Currency::INR)),
            1,
        );

        match planogram.validate() {
            Err(VendError::InvalidPrice { message }) => {
                assert!(message.contains("slot 1"));
            }
            other => panic!("expected InvalidPrice, got {:?}", other),
        }
    }
}
