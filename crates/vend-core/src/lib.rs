//! # vend-core
//!
//! Core types and traits for the slot-vend vending machine.
//!
//! This crate provides:
//! - `PaymentMethod` trait for implementing payment behaviors
//! - `Product`, `Price`, and `Currency` for the product model
//! - `Slot`, `Inventory`, and `Planogram` for per-slot stock tracking
//! - `PaymentProcessor` for single-attempt settlement
//! - `VendingMachine` façade composing inventory and payment
//! - `VendError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use vend_core::{Currency, Price, Product, VendingMachine};
//! use vend_methods::CashPayment;
//!
//! let mut machine = VendingMachine::new();
//! machine.load_product(1, Product::new(101, "Chips", Price::new(30.0, Currency::INR)), 5);
//!
//! for listing in machine.list_available() {
//!     println!("Slot {}: {}", listing.slot_id, listing.product.name);
//! }
//!
//! let dispensed = machine.buy(1, &CashPayment)?;
//! ```

pub mod error;
pub mod inventory;
pub mod machine;
pub mod method;
pub mod processor;
pub mod product;

// Re-exports for convenience
pub use error::{VendError, VendResult};
pub use inventory::{Inventory, Planogram, PlanogramSlot, Slot};
pub use machine::{SlotListing, VendingMachine};
pub use method::{BoxedPaymentMethod, PaymentMethod, PaymentMethodSelector};
pub use processor::PaymentProcessor;
pub use product::{Currency, Price, Product};
