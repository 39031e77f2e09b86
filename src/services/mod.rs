//! Service layer for business logic.
//!
//! This module contains services that coordinate the parsing pipeline and
//! file handling around the core model types.

pub mod loader;
pub mod model;

// Re-export commonly used types and functions
pub use loader::{CompiledBoard, LayoutService};
pub use model::build_layout_model;
