//! # Slot-Vend RS
//!
//! Single-unit vending machine demo.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a planogram file
//! export VEND_PLANOGRAM=config/planogram.toml
//!
//! # Run the demo
//! slot-vend
//! ```

use anyhow::anyhow;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vend_cli::{display, state::MachineState};
use vend_core::{Currency, Price};
use vend_methods::PrepaidCard;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Stock the machine and register payment methods
    let mut state = MachineState::new()?;

    info!("Environment: {}", state.config.environment);
    info!("Slots stocked: {}", state.machine.slot_count());
    info!("Payment methods: {:?}", state.methods.names());

    println!("Available items:");
    println!("{}", display::render_listing(&state.machine.list_available()));

    let cash = state
        .methods
        .get("cash")
        .ok_or_else(|| anyhow!("cash method not registered"))?;
    let card = state
        .methods
        .get("card")
        .ok_or_else(|| anyhow!("card method not registered"))?;

    println!();
    println!("Buying Chips with Cash:");
    let dispensed = state.machine.buy(1, cash.as_ref())?;
    println!("{}", display::outcome_line("Chips", dispensed));

    println!();
    println!("Buying Coke with Card:");
    let dispensed = state.machine.buy(2, card.as_ref())?;
    println!("{}", display::outcome_line("Coke", dispensed));

    // A prepaid card too small for anything in the machine: the decline
    // path, stock untouched
    let prepaid = PrepaidCard::new(Price::new(10.0, Currency::INR));
    println!();
    println!(
        "Buying Chips with a {} prepaid card:",
        prepaid.balance().display()
    );
    let dispensed = state.machine.buy(1, &prepaid)?;
    println!("{}", display::outcome_line("Chips", dispensed));

    println!();
    println!("Remaining items:");
    println!("{}", display::render_listing(&state.machine.list_available()));

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🥤 Slot-Vend RS 🥤
  ━━━━━━━━━━━━━━━━━━━
  Single-unit vending machine
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
