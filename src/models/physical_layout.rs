//! Physical key geometry from a ZMK layout (`.dtsi`) source.

use serde::{Deserialize, Serialize};

/// A single key slot from a `&key_physical_attrs` record.
///
/// # Units
///
/// All geometric fields are in centi-key units: 100 units equal one standard
/// keycap width. Negative x/y values occur on columns-staggered boards;
/// rotation is in centi-degrees around the rotation origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Zero-based encounter order within the layout's `keys` list
    pub index: usize,
    /// Key width in centi-key units
    pub width: i32,
    /// Key height in centi-key units
    pub height: i32,
    /// Horizontal offset of the key's top-left corner
    pub x: i32,
    /// Vertical offset of the key's top-left corner
    pub y: i32,
    /// Rotation in centi-degrees (0 for unrotated keys)
    pub rotation: i32,
    /// Rotation origin X in centi-key units
    pub rotation_x: i32,
    /// Rotation origin Y in centi-key units
    pub rotation_y: i32,
}

/// Physical layout parsed from a `<name>_layout` device-tree node.
///
/// # Invariants
///
/// - `keys` preserves file order
/// - `KeyPosition::index` values are contiguous starting at 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalLayout {
    /// Node label identifier (e.g. `typhon_layout`)
    pub name: String,
    /// Human-readable name from the `display-name` property, or derived
    /// from the label when the property is absent
    pub display_name: String,
    /// Key positions in file order
    pub keys: Vec<KeyPosition>,
}

impl PhysicalLayout {
    /// Creates an empty layout with the given identifier and display name.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            keys: Vec::new(),
        }
    }

    /// Gets the total number of key positions.
    #[must_use]
    pub const fn key_count(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_at(index: usize, x: i32, y: i32) -> KeyPosition {
        KeyPosition {
            index,
            width: 100,
            height: 100,
            x,
            y,
            rotation: 0,
            rotation_x: 0,
            rotation_y: 0,
        }
    }

    #[test]
    fn test_physical_layout_new() {
        let layout = PhysicalLayout::new("typhon_layout", "Typhon");
        assert_eq!(layout.name, "typhon_layout");
        assert_eq!(layout.display_name, "Typhon");
        assert_eq!(layout.key_count(), 0);
    }

    #[test]
    fn test_key_count_tracks_keys() {
        let mut layout = PhysicalLayout::new("corne_layout", "Corne");
        layout.keys.push(square_at(0, 0, 0));
        layout.keys.push(square_at(1, 100, 0));
        assert_eq!(layout.key_count(), 2);
        assert_eq!(layout.keys[1].x, 100);
    }

    #[test]
    fn test_key_position_serializes_all_fields() {
        let json = serde_json::to_value(square_at(3, -50, 25)).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["x"], -50);
        assert_eq!(json["rotation"], 0);
    }
}
