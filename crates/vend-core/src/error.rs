//! # Vending Error Types
//!
//! Typed error handling for the slot-vend machine.
//! Fallible operations return `Result<T, VendError>`.
//!
//! Business outcomes (slot out of stock, payment declined) are **not**
//! errors — they are ordinary `bool` results. `VendError` is reserved for
//! caller-contract violations and configuration failures.

use thiserror::Error;

/// Core error type for vending operations
#[derive(Debug, Error)]
pub enum VendError {
    /// Configuration errors (missing planogram, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No product was ever loaded in the requested slot
    #[error("Invalid slot: no product loaded in slot {slot_id}")]
    InvalidSlot { slot_id: u32 },

    /// Price failed validation (negative amount)
    #[error("Invalid price: {message}")]
    InvalidPrice { message: String },
}

impl VendError {
    /// Returns true if this error signals a broken caller contract
    /// (as opposed to bad configuration input).
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, VendError::InvalidSlot { .. })
    }
}

/// Result type alias for vending operations
pub type VendResult<T> = Result<T, VendError>;
