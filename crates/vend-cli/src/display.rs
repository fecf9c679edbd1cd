//! # Console Display
//!
//! Human-readable formatting for listings and purchase outcomes. The core
//! reports through return values; everything the buyer reads on the console
//! is rendered here.

use vend_core::SlotListing;

/// Format one listing row, e.g. `Slot 1: Chips (₹30.00), qty 5`
pub fn listing_line(listing: &SlotListing) -> String {
    format!(
        "Slot {}: {} ({}), qty {}",
        listing.slot_id,
        listing.product.name,
        listing.product.price.display(),
        listing.quantity
    )
}

/// Format a full availability listing, one row per populated slot
pub fn render_listing(listings: &[SlotListing]) -> String {
    if listings.is_empty() {
        return "  (machine is empty)".to_string();
    }

    listings
        .iter()
        .map(|listing| format!("  {}", listing_line(listing)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the outcome of a purchase attempt
pub fn outcome_line(product_name: &str, dispensed: bool) -> String {
    if dispensed {
        format!("Dispensing {}", product_name)
    } else {
        format!("Could not dispense {}", product_name)
    }
}
