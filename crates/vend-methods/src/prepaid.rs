//! # Prepaid Card
//!
//! Stored-balance card: the stateful counterpart to `CashPayment` and
//! `CardPayment`. Each settlement deducts from the balance; once the balance
//! cannot cover the amount, the card declines.

use std::cell::Cell;
use tracing::info;
use vend_core::{Currency, PaymentMethod, Price};

/// Prepaid card with a stored balance.
///
/// Balance lives in a `Cell` so `attempt(&self)` can deduct it — the trait
/// is single-threaded by design, so interior mutability here needs no lock.
/// The card is pinned to the currency it was issued in and declines any
/// amount in another currency.
#[derive(Debug)]
pub struct PrepaidCard {
    balance: Cell<i64>,
    currency: Currency,
}

impl PrepaidCard {
    /// Issue a card holding `balance`
    pub fn new(balance: Price) -> Self {
        Self {
            balance: Cell::new(balance.amount),
            currency: balance.currency,
        }
    }

    /// Remaining balance on the card
    pub fn balance(&self) -> Price {
        Price::from_minor(self.balance.get(), self.currency)
    }
}

impl PaymentMethod for PrepaidCard {
    fn attempt(&self, amount: &Price) -> bool {
        if amount.currency != self.currency {
            info!(
                "Prepaid card declined: card issued in {}, charge is {}",
                self.currency, amount.currency
            );
            return false;
        }

        let remaining = self.balance.get();
        if amount.amount > remaining {
            info!(
                "Prepaid card declined: balance {} cannot cover {}",
                self.balance().display(),
                amount.display()
            );
            return false;
        }

        self.balance.set(remaining - amount.amount);
        info!(
            "Prepaid card payment of {}, {} remaining",
            amount.display(),
            self.balance().display()
        );
        true
    }

    fn display_name(&self) -> &'static str {
        "Prepaid"
    }
}
