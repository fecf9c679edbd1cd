//! # vend-methods
//!
//! Payment method implementations for slot-vend-rs.
//!
//! This crate provides three implementations of `vend_core::PaymentMethod`:
//!
//! 1. **CashPayment** - exact cash, always settles
//! 2. **CardPayment** - card tap, always settles in this design
//! 3. **PrepaidCard** - stored-balance card that declines once the balance
//!    runs out
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vend_core::{PaymentMethodSelector, VendingMachine};
//! use vend_methods::{CardPayment, CashPayment};
//!
//! let methods = PaymentMethodSelector::new("cash")
//!     .with_method(Box::new(CashPayment))
//!     .with_method(Box::new(CardPayment));
//!
//! let cash = methods.get("cash").unwrap();
//! let dispensed = machine.buy(1, cash.as_ref())?;
//! ```

pub mod card;
pub mod cash;
pub mod prepaid;

// Re-exports
pub use card::CardPayment;
pub use cash::CashPayment;
pub use prepaid::PrepaidCard;
