//! Layout compilation: correlating physical geometry with keymap bindings.
//!
//! Correlation is positional. Nothing in the two source formats links a
//! geometry record to a binding explicitly; the key at geometry index `i`
//! takes binding `i` of the default layer. Length mismatches are survivable:
//! positions past the last binding render as transparent, bindings past the
//! last position are ignored, and either case logs a warning.

use tracing::warn;

use crate::bindings::resolve;
use crate::constants::{
    DEFAULT_MODEL_HEIGHT, DEFAULT_MODEL_WIDTH, MODEL_PADDING, RENDER_SCALE, TRANSPARENT_BINDING,
};
use crate::models::{ComposedKey, KeyFrame, KeyboardLayoutModel, Keymap, PhysicalLayout};

/// Compiles a physical layout and keymap into a renderable model.
///
/// Every geometric field is scaled from centi-key units to output units by
/// a fixed linear factor. The bounding size is the scaled extent of the
/// farthest key edges plus a fixed padding; a layout with zero positions
/// gets a fixed default size instead.
#[must_use]
pub fn build_layout_model(layout: &PhysicalLayout, keymap: &Keymap) -> KeyboardLayoutModel {
    let bindings = keymap
        .default_layer()
        .map_or(&[][..], |layer| layer.bindings.as_slice());

    if bindings.len() != layout.keys.len() {
        warn!(
            "keymap '{}' has {} bindings for {} positions in layout '{}'",
            keymap.name,
            bindings.len(),
            layout.keys.len(),
            layout.name
        );
    }

    let mut keys = Vec::with_capacity(layout.keys.len());
    for position in &layout.keys {
        let expression = bindings
            .get(position.index)
            .map_or(TRANSPARENT_BINDING, String::as_str);

        let frame = KeyFrame {
            x: position.x as f32 * RENDER_SCALE,
            y: position.y as f32 * RENDER_SCALE,
            width: position.width as f32 * RENDER_SCALE,
            height: position.height as f32 * RENDER_SCALE,
        };

        keys.push(ComposedKey {
            position: *position,
            frame,
            binding: resolve(expression),
        });
    }

    let (width, height) = bounding_size(&keys);

    KeyboardLayoutModel {
        display_name: layout.display_name.clone(),
        keys,
        width,
        height,
    }
}

/// Computes the model's bounding size from scaled key frames.
///
/// Extents fold from the origin: a layout living entirely at negative
/// coordinates reports the padding-only minimum rather than a negative
/// size.
fn bounding_size(keys: &[ComposedKey]) -> (f32, f32) {
    if keys.is_empty() {
        return (DEFAULT_MODEL_WIDTH, DEFAULT_MODEL_HEIGHT);
    }

    let (max_x, max_y) = keys.iter().fold((0.0f32, 0.0f32), |(max_x, max_y), key| {
        (
            max_x.max(key.frame.x + key.frame.width),
            max_y.max(key.frame.y + key.frame.height),
        )
    });

    (max_x + MODEL_PADDING, max_y + MODEL_PADDING)
}
