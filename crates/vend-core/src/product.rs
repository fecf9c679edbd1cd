//! # Product Types
//!
//! Product and money types for slot-vend-rs.
//! Products reach the machine either constructed in code or deserialized
//! from a planogram file (see `inventory::Planogram`).

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    INR,
    JPY,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::INR => "inr",
            Currency::JPY => "jpy",
        }
    }

    /// Returns the number of decimal places for this currency
    /// (JPY has 0 decimals, the others have 2)
    pub fn decimal_places(&self) -> u8 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Convert a decimal amount to the smallest currency unit (cents, paise)
    pub fn to_minor_unit(&self, amount: f64) -> i64 {
        let multiplier = 10_f64.powi(self.decimal_places() as i32);
        (amount * multiplier).round() as i64
    }

    /// Convert from smallest unit back to decimal
    pub fn from_minor_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }

    /// Display symbol for this currency
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::INR => "₹",
            Currency::JPY => "¥",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (paise for INR, cents for USD)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a decimal amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_minor_unit(amount),
            currency,
        }
    }

    /// Create a price from smallest unit (paise, cents)
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_minor_unit(self.amount)
    }

    /// Format for display (e.g., "₹30.00")
    pub fn display(&self) -> String {
        if self.currency.decimal_places() == 0 {
            format!("{}{}", self.currency.symbol(), self.amount)
        } else {
            format!("{}{:.2}", self.currency.symbol(), self.as_decimal())
        }
    }
}

/// A product held in a vending slot.
///
/// Plain value data: freely copyable, immutable once constructed. Slots own
/// their product by value rather than sharing a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier (e.g., 101)
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl Product {
    /// Create a new product
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let inr = Currency::INR;
        assert_eq!(inr.to_minor_unit(30.0), 3000);
        assert_eq!(inr.from_minor_unit(3000), 30.0);

        let jpy = Currency::JPY;
        assert_eq!(jpy.to_minor_unit(1000.0), 1000);
        assert_eq!(jpy.from_minor_unit(1000), 1000.0);
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(30.0, Currency::INR);
        assert_eq!(price.display(), "₹30.00");

        let price_usd = Price::new(1.25, Currency::USD);
        assert_eq!(price_usd.display(), "$1.25");

        let price_jpy = Price::new(150.0, Currency::JPY);
        assert_eq!(price_jpy.display(), "¥150");
    }

    #[test]
    fn test_price_minor_round_trip() {
        let price = Price::from_minor(5000, Currency::INR);
        assert_eq!(price.as_decimal(), 50.0);
        assert_eq!(price, Price::new(50.0, Currency::INR));
    }

    #[test]
    fn test_product_value_semantics() {
        let chips = Product::new(101, "Chips", Price::new(30.0, Currency::INR));
        let copy = chips.clone();
        assert_eq!(chips, copy);
        assert_eq!(copy.name, "Chips");
        assert_eq!(copy.price.amount, 3000);
    }
}
