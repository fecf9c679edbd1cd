//! # Cash Payment
//!
//! Exact-cash settlement. The model assumes the buyer inserts the exact
//! amount, so there is no change computation and no decline path.

use tracing::info;
use vend_core::{PaymentMethod, Price};

/// Cash payment: always settles
#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentMethod for CashPayment {
    fn attempt(&self, amount: &Price) -> bool {
        info!("Cash payment of {}", amount.display());
        true
    }

    fn display_name(&self) -> &'static str {
        "Cash"
    }
}
