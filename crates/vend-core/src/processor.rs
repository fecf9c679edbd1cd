//! # Payment Processor
//!
//! Orchestrates a single settlement attempt against a chosen payment method.

use crate::method::PaymentMethod;
use crate::product::Price;
use tracing::info;

/// Synchronous, single-attempt settlement orchestrator.
///
/// Logs every attempt — settled or declined — then returns the method's
/// verdict verbatim. No retry, no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentProcessor;

impl PaymentProcessor {
    /// Create a new processor
    pub fn new() -> Self {
        Self
    }

    /// Attempt to settle `amount` with `method`.
    ///
    /// Exactly one attempt log is emitted per call, regardless of outcome.
    pub fn process(&self, method: &dyn PaymentMethod, amount: &Price) -> bool {
        info!(
            "Attempting {} payment of {}",
            method.display_name(),
            amount.display()
        );
        method.attempt(amount)
    }
}
