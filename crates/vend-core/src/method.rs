//! # Payment Method Trait
//!
//! Capability trait for payment behaviors, selectable at purchase time.
//!
//! The machine never constructs a payment method itself: implementations are
//! registered explicitly (or handed straight to `buy`), and swapping one for
//! another changes no client code.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              PaymentMethod (trait)           │
//! │  ├── attempt()                               │
//! │  └── display_name()                          │
//! └──────────────────────────────────────────────┘
//!                       ▲
//!        ┌──────────────┼──────────────┐
//!        │              │              │
//! ┌──────┴──────┐ ┌─────┴─────┐ ┌──────┴──────┐
//! │ CashPayment │ │CardPayment│ │ PrepaidCard │
//! └─────────────┘ └───────────┘ └─────────────┘
//! ```

use crate::product::Price;
use std::collections::HashMap;

/// Capability trait for settling a payment amount.
///
/// Declining is an expected business outcome, reported as `false` — an
/// implementation must never panic to signal a failed settlement. The
/// reference variants are stateless, but the trait takes `&self` with
/// interior mutability left to implementations that track state (see
/// `PrepaidCard` in vend-methods).
pub trait PaymentMethod {
    /// Attempt to settle `amount`. Returns true on settlement, false on
    /// decline.
    fn attempt(&self, amount: &Price) -> bool;

    /// Human-readable method name (for logging and registry keys).
    fn display_name(&self) -> &'static str;
}

/// Type alias for a boxed payment method (dynamic dispatch).
///
/// Plain `Box`, no `Send + Sync` bound: the machine is a single-threaded,
/// single-session model.
pub type BoxedPaymentMethod = Box<dyn PaymentMethod>;

/// Registry of payment methods with a default.
///
/// Keys are lowercased display names, so lookups are case-insensitive.
pub struct PaymentMethodSelector {
    methods: HashMap<String, BoxedPaymentMethod>,
    default_method: String,
}

impl PaymentMethodSelector {
    /// Create a new selector with a default method name
    pub fn new(default_method: impl Into<String>) -> Self {
        Self {
            methods: HashMap::new(),
            default_method: default_method.into().to_lowercase(),
        }
    }

    /// Register a payment method under its display name
    pub fn register(&mut self, method: BoxedPaymentMethod) {
        let name = method.display_name().to_lowercase();
        self.methods.insert(name, method);
    }

    /// Register with builder pattern
    pub fn with_method(mut self, method: BoxedPaymentMethod) -> Self {
        self.register(method);
        self
    }

    /// Get the default method
    pub fn default_method(&self) -> Option<&BoxedPaymentMethod> {
        self.methods.get(&self.default_method)
    }

    /// Get a method by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&BoxedPaymentMethod> {
        self.methods.get(&name.to_lowercase())
    }

    /// Get a method or fall back to the default
    pub fn get_or_default(&self, name: Option<&str>) -> Option<&BoxedPaymentMethod> {
        match name {
            Some(n) => self.get(n).or_else(|| self.default_method()),
            None => self.default_method(),
        }
    }

    /// List all registered method names
    pub fn names(&self) -> Vec<&str> {
        self.methods.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a method is registered
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(&name.to_lowercase())
    }
}

impl Default for PaymentMethodSelector {
    fn default() -> Self {
        Self::new("cash")
    }
}
