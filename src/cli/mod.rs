//! CLI command handlers for ZMK Lens.
//!
//! This module provides headless, scriptable access to the compilation
//! pipeline for automation, testing, and CI integration.

pub mod common;
pub mod config;
pub mod export;
pub mod inspect;
pub mod legend;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use inspect::InspectArgs;
pub use legend::LegendArgs;
pub use validate::ValidateArgs;
