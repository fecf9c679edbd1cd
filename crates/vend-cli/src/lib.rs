//! # vend-cli
//!
//! Console demo driver for slot-vend-rs.
//!
//! This crate provides:
//! - Environment-driven configuration and planogram loading
//! - Console formatting for listings and purchase outcomes
//! - The `slot-vend` binary running the demo purchase sequence

pub mod display;
pub mod state;

pub use state::{AppConfig, MachineState};
