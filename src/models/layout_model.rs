//! The compiled, renderable layout model.
//!
//! This is the artifact handed across the core boundary: every key carries
//! its source geometry, a scaled frame in output units, and a resolved
//! legend. Consumers render it; nothing in here is mutated after compile.

use serde::Serialize;

use crate::bindings::ResolvedBinding;
use crate::models::physical_layout::KeyPosition;

/// A key's rectangle in output units after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyFrame {
    /// Horizontal offset of the top-left corner
    pub x: f32,
    /// Vertical offset of the top-left corner
    pub y: f32,
    /// Frame width
    pub width: f32,
    /// Frame height
    pub height: f32,
}

/// One renderable key: source geometry, scaled frame, resolved binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedKey {
    /// Original geometry record in centi-key units
    pub position: KeyPosition,
    /// Scaled rectangle in output units
    pub frame: KeyFrame,
    /// Display legend and optional platform key code
    pub binding: ResolvedBinding,
}

/// A fully compiled keyboard layout ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyboardLayoutModel {
    /// Human-readable layout name
    pub display_name: String,
    /// Composed keys in physical-layout order
    pub keys: Vec<ComposedKey>,
    /// Bounding width in output units, padding included
    pub width: f32,
    /// Bounding height in output units, padding included
    pub height: f32,
}

impl KeyboardLayoutModel {
    /// Gets the total number of keys in the model.
    #[must_use]
    pub const fn key_count(&self) -> usize {
        self.keys.len()
    }
}
