//! Keymap layers and raw binding expressions from a ZMK `.keymap` source.

use serde::{Deserialize, Serialize};

/// One keymap layer: an ordered list of raw binding expressions.
///
/// Bindings are stored exactly as written in the source (e.g. `&kp TAB`,
/// `&mo 1`) and stay opaque until resolved for display. Binding order equals
/// source declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Node identifier (e.g. `default_layer`)
    pub name: String,
    /// Human-readable name derived from the identifier (e.g. "Default")
    pub display_name: String,
    /// Raw binding expressions in declaration order
    pub bindings: Vec<String>,
}

impl Layer {
    /// Creates an empty layer with the given identifier and display name.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            bindings: Vec::new(),
        }
    }

    /// Gets the number of bindings in the layer.
    #[must_use]
    pub const fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

/// A parsed keymap: named, ordered layers.
///
/// The format has no explicit "default" marker; the first layer in
/// declaration order is the default layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Source identifier the keymap was parsed from (file base name)
    pub name: String,
    /// Layers in declaration order
    pub layers: Vec<Layer>,
}

impl Keymap {
    /// Creates an empty keymap named after its source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
        }
    }

    /// Gets the default layer: the first layer in declaration order.
    #[must_use]
    pub fn default_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// Gets every layer's display name in declaration order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers
            .iter()
            .map(|layer| layer.display_name.as_str())
            .collect()
    }
}
