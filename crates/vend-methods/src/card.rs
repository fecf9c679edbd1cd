//! # Card Payment
//!
//! Card-tap settlement. This design authorizes unconditionally — there is no
//! issuer round-trip — but callers must still branch on the returned verdict,
//! since the `PaymentMethod` contract allows any implementation to decline.

use tracing::info;
use vend_core::{PaymentMethod, Price};

/// Card payment: always authorizes in this design
#[derive(Debug, Clone, Copy, Default)]
pub struct CardPayment;

impl PaymentMethod for CardPayment {
    fn attempt(&self, amount: &Price) -> bool {
        info!("Card payment of {} authorized", amount.display());
        true
    }

    fn display_name(&self) -> &'static str {
        "Card"
    }
}
