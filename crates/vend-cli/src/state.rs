//! # Driver State
//!
//! Configuration and machine construction for the demo driver: resolve a
//! planogram, stock a machine from it, and register the payment methods.

use anyhow::Context;
use std::path::PathBuf;
use tracing::{info, warn};
use vend_core::{
    Currency, PaymentMethodSelector, Planogram, Price, Product, VendingMachine,
};
use vend_methods::{CardPayment, CashPayment};

/// Driver configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Explicit planogram path (overrides the search paths)
    pub planogram_path: Option<PathBuf>,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// Recognized env vars:
    /// - `VEND_PLANOGRAM` - path to a planogram TOML file
    /// - `VEND_ENV` - environment name
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            planogram_path: std::env::var("VEND_PLANOGRAM").ok().map(PathBuf::from),
            environment: std::env::var("VEND_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// The demo driver's world: one machine, the registered payment methods,
/// and the configuration they were built from.
pub struct MachineState {
    /// The vending machine, stocked from the resolved planogram
    pub machine: VendingMachine,
    /// Registered payment methods
    pub methods: PaymentMethodSelector,
    /// Driver config
    pub config: AppConfig,
}

impl MachineState {
    /// Build the machine: load config, resolve a planogram, stock the
    /// machine, and register the cash and card methods.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let planogram = load_planogram(&config)?;

        let mut machine = VendingMachine::new();
        machine.load_planogram(&planogram);

        let methods = PaymentMethodSelector::new("cash")
            .with_method(Box::new(CashPayment))
            .with_method(Box::new(CardPayment));

        Ok(Self {
            machine,
            methods,
            config,
        })
    }
}

/// Resolve a planogram: explicit env path, then the search paths, then the
/// built-in demo plan.
fn load_planogram(config: &AppConfig) -> anyhow::Result<Planogram> {
    if let Some(path) = &config.planogram_path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read planogram {}", path.display()))?;
        let planogram = Planogram::from_toml(&content)
            .with_context(|| format!("Failed to parse planogram {}", path.display()))?;
        planogram.validate()?;
        info!(
            "Loaded {} planogram entries from {}",
            planogram.slots.len(),
            path.display()
        );
        return Ok(planogram);
    }

    let search_paths = [
        "config/planogram.toml",
        "../config/planogram.toml",
        "../../config/planogram.toml",
    ];

    for path in search_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let planogram = Planogram::from_toml(&content)
                .with_context(|| format!("Failed to parse planogram {}", path))?;
            planogram.validate()?;
            info!(
                "Loaded {} planogram entries from {}",
                planogram.slots.len(),
                path
            );
            return Ok(planogram);
        }
    }

    warn!("No planogram found, stocking the built-in demo plan");
    Ok(demo_planogram())
}

/// The built-in demo stocking plan: chips and a soft drink
pub fn demo_planogram() -> Planogram {
    let mut planogram = Planogram::new();
    planogram.add(
        1,
        Product::new(101, "Chips", Price::new(30.0, Currency::INR)),
        5,
    );
    planogram.add(
        2,
        Product::new(102, "Coke", Price::new(50.0, Currency::INR)),
        3,
    );
    planogram
}
