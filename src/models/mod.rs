//! Core data model: parsed layouts, parsed keymaps, and the compiled
//! renderable layout model.

pub mod keymap;
pub mod layout_model;
pub mod physical_layout;

pub use keymap::{Keymap, Layer};
pub use layout_model::{ComposedKey, KeyFrame, KeyboardLayoutModel};
pub use physical_layout::{KeyPosition, PhysicalLayout};
