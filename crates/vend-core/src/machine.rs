//! # Vending Machine
//!
//! The façade: one inventory, one payment processor, and the purchase flow
//! that composes them.
//!
//! A machine is an explicitly constructed, explicitly owned value — create
//! one with `VendingMachine::new()` and pass it where it is needed. Nothing
//! here is global, so tests (and a future multi-unit deployment) can hold as
//! many independent machines as they like.

use crate::error::VendResult;
use crate::inventory::{Inventory, Planogram};
use crate::method::PaymentMethod;
use crate::processor::PaymentProcessor;
use crate::product::Product;
use tracing::{error, info, instrument};

/// One row of an availability listing: a populated slot with its product
/// denormalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotListing {
    /// Slot identifier
    pub slot_id: u32,

    /// Product stocked in the slot
    pub product: Product,

    /// Remaining quantity
    pub quantity: u32,
}

/// Single-unit vending machine.
///
/// Not safe for concurrent callers: the purchase flow checks stock and later
/// decrements it as two separate steps with no slot-level lock. The model is
/// single-threaded and single-session throughout.
#[derive(Debug, Default)]
pub struct VendingMachine {
    inventory: Inventory,
    processor: PaymentProcessor,
}

impl VendingMachine {
    /// Create a machine with an empty inventory
    pub fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            processor: PaymentProcessor::new(),
        }
    }

    /// Stock `quantity` units of `product` in `slot_id`.
    ///
    /// Restocking an existing slot replaces its contents outright. Quantity
    /// 0 defines the slot but leaves it empty.
    pub fn load_product(&mut self, slot_id: u32, product: Product, quantity: u32) {
        info!("Loaded {} x{} in slot {}", product.name, quantity, slot_id);
        self.inventory.add_slot(slot_id, product, quantity);
    }

    /// Stock the machine from a planogram, one `load_product` per entry
    pub fn load_planogram(&mut self, planogram: &Planogram) {
        for entry in &planogram.slots {
            self.load_product(entry.slot, entry.product.clone(), entry.quantity);
        }
    }

    /// The populated slots (quantity > 0), in ascending slot order.
    ///
    /// Calling this twice with no intervening mutation yields identical
    /// results.
    pub fn list_available(&self) -> Vec<SlotListing> {
        self.inventory
            .in_stock()
            .map(|(slot_id, slot)| SlotListing {
                slot_id,
                product: slot.product.clone(),
                quantity: slot.quantity,
            })
            .collect()
    }

    /// Purchase one unit from `slot_id`, settling with `method`.
    ///
    /// `Ok(false)` is the business-outcome channel: no stock, or the method
    /// declined. Inventory is untouched in both cases. `Ok(true)` means one
    /// unit was dispensed and the slot decremented by exactly one. An `Err`
    /// would signal a broken caller contract; the stock guard below keeps
    /// the purchase path clear of it.
    #[instrument(skip(self, method), fields(method = method.display_name()))]
    pub fn buy(&mut self, slot_id: u32, method: &dyn PaymentMethod) -> VendResult<bool> {
        if !self.inventory.has_stock(slot_id) {
            info!("Slot {} has no stock, rejecting purchase", slot_id);
            return Ok(false);
        }

        let product = self.inventory.product(slot_id)?.clone();
        info!(
            "Selected {} ({}) from slot {}",
            product.name,
            product.price.display(),
            slot_id
        );

        if !self.processor.process(method, &product.price) {
            info!("Payment declined for {}", product.name);
            return Ok(false);
        }

        // Stock was confirmed above and nothing else mutates the inventory
        // in this single-threaded model, so a refusal here means the
        // check/consume invariant broke.
        if !self.inventory.consume_one(slot_id) {
            error!("Slot {} emptied between stock check and dispense", slot_id);
            return Ok(false);
        }

        info!("Dispensing {}", product.name);
        Ok(true)
    }

    /// True iff `slot_id` is populated with at least one unit
    pub fn has_stock(&self, slot_id: u32) -> bool {
        self.inventory.has_stock(slot_id)
    }

    /// Remaining quantity in `slot_id` (0 when the slot was never loaded)
    pub fn quantity(&self, slot_id: u32) -> u32 {
        self.inventory.quantity(slot_id)
    }

    /// Number of defined slots, empty ones included
    pub fn slot_count(&self) -> usize {
        self.inventory.slot_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Currency, Price};

    struct AlwaysSettles;

    impl PaymentMethod for AlwaysSettles {
        fn attempt(&self, _amount: &Price) -> bool {
            true
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }
    }

    struct AlwaysDeclines;

    impl PaymentMethod for AlwaysDeclines {
        fn attempt(&self, _amount: &Price) -> bool {
            false
        }

        fn display_name(&self) -> &'static str {
            "Declining"
        }
    }

    fn chips() -> Product {
        Product::new(101, "Chips", Price::new(30.0, Currency::INR))
    }

    fn coke() -> Product {
        Product::new(102, "Coke", Price::new(50.0, Currency::INR))
    }

    #[test]
    fn test_buy_dispenses_and_decrements_by_one() {
        let mut machine = VendingMachine::new();
        machine.load_product(1, chips(), 5);
        machine.load_product(2, coke(), 3);

        assert!(machine.buy(1, &AlwaysSettles).unwrap());
        assert_eq!(machine.quantity(1), 4);
        // no other slot moved
        assert_eq!(machine.quantity(2), 3);
    }

    #[test]
    fn test_buy_unloaded_slot_returns_false() {
        let mut machine = VendingMachine::new();

        assert!(!machine.buy(2, &AlwaysSettles).unwrap());
        assert_eq!(machine.quantity(2), 0);
    }

    #[test]
    fn test_buy_empty_slot_returns_false() {
        let mut machine = VendingMachine::new();
        machine.load_product(3, coke(), 0);

        assert!(!machine.has_stock(3));
        assert!(!machine.buy(3, &AlwaysSettles).unwrap());
        assert_eq!(machine.quantity(3), 0);
    }

    #[test]
    fn test_declined_payment_leaves_stock_unchanged() {
        let mut machine = VendingMachine::new();
        machine.load_product(1, chips(), 5);

        assert!(!machine.buy(1, &AlwaysDeclines).unwrap());
        assert_eq!(machine.quantity(1), 5);
    }

    #[test]
    fn test_buy_to_exhaustion_never_goes_negative() {
        let mut machine = VendingMachine::new();
        machine.load_product(1, chips(), 2);

        assert!(machine.buy(1, &AlwaysSettles).unwrap());
        assert!(machine.buy(1, &AlwaysSettles).unwrap());
        assert!(!machine.buy(1, &AlwaysSettles).unwrap());
        assert_eq!(machine.quantity(1), 0);
    }

    #[test]
    fn test_listing_skips_empty_and_sorts_ascending() {
        let mut machine = VendingMachine::new();
        machine.load_product(42, chips(), 1);
        machine.load_product(3, coke(), 0);
        machine.load_product(7, coke(), 4);

        let listings = machine.list_available();
        let ids: Vec<u32> = listings.iter().map(|l| l.slot_id).collect();
        assert_eq!(ids, vec![7, 42]);
        assert_eq!(listings[1].product.name, "Chips");
        assert_eq!(listings[0].quantity, 4);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let mut machine = VendingMachine::new();
        machine.load_product(1, chips(), 5);
        machine.load_product(2, coke(), 3);

        assert_eq!(machine.list_available(), machine.list_available());
    }

    #[test]
    fn test_restock_replaces_slot() {
        let mut machine = VendingMachine::new();
        machine.load_product(1, chips(), 5);
        machine.load_product(1, coke(), 2);

        assert_eq!(machine.quantity(1), 2);
        let listings = machine.list_available();
        assert_eq!(listings[0].product.name, "Coke");
    }

    #[test]
    fn test_load_planogram_stocks_every_entry() {
        let mut planogram = Planogram::new();
        planogram.add(1, chips(), 5);
        planogram.add(2, coke(), 3);

        let mut machine = VendingMachine::new();
        machine.load_planogram(&planogram);

        assert_eq!(machine.slot_count(), 2);
        assert!(machine.has_stock(1));
        assert_eq!(machine.quantity(2), 3);
    }
}
