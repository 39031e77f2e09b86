//! Binding expression resolution.
//!
//! Turns raw ZMK binding expressions (`&kp TAB`, `&mo 1`, `&bt BT_SEL 0`)
//! into display legends and, where the hardware has one, platform key
//! codes. Resolution is total: ZMK behaviors are an open vocabulary, so
//! anything unrecognized degrades to a readable textual legend instead of
//! an error.

mod tables;

use serde::Serialize;

use crate::constants::{BEHAVIOR_MARKER, TRANSPARENT_LEGEND};

/// Platform key code as used by Linux input events (`KEY_*` values from
/// `input-event-codes.h`).
pub type PlatformKeyCode = u16;

/// Legend prefix for momentary layer switches.
const MOMENTARY_LEGEND_PREFIX: &str = "MO";

/// Legend prefix shared by the bluetooth behavior family.
const BLUETOOTH_LEGEND_PREFIX: &str = "BT";

/// Display output for one binding expression.
///
/// The two fields are resolved independently: a key may have a legend
/// without a code (shifted symbols, layer switches) and the absence of one
/// says nothing about the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBinding {
    /// Label to draw on the key; may be empty, never absent
    pub legend: String,
    /// Input-event code for recognized literal key presses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<PlatformKeyCode>,
}

impl ResolvedBinding {
    fn legend_only(legend: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            key_code: None,
        }
    }
}

/// A binding expression classified by its behavior marker.
///
/// The vocabulary is open-ended; [`Behavior::Unknown`] keeps classification
/// total as new ZMK behaviors appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    /// `&trans`: fall through to the same position on a lower layer.
    Transparent,
    /// `&kp <KEY>`: press a literal key.
    KeyPress {
        /// Symbolic key name, e.g. `TAB` or `N1`
        key: String,
    },
    /// `&mo <N>`: activate a layer while held.
    MomentaryLayer {
        /// Numeric layer parameter, kept verbatim
        layer: String,
    },
    /// `&bt <ACTION> [N]`: bluetooth profile management.
    Bluetooth {
        /// Sub-command, e.g. `BT_SEL` or `BT_CLR`; empty when absent
        action: String,
        /// Profile number for selection sub-commands
        target: Option<String>,
    },
    /// Any behavior outside the recognized set.
    Unknown {
        /// Behavior name without its marker
        name: String,
        /// First parameter, when present
        param: Option<String>,
    },
}

impl Behavior {
    /// Classifies a raw binding expression.
    ///
    /// `&mo` only counts as a momentary layer switch when its parameter is
    /// numeric; anything else lands in [`Behavior::Unknown`] and resolves
    /// through the generic fallback.
    #[must_use]
    pub fn parse(expression: &str) -> Self {
        let mut tokens = expression.split_whitespace();
        let head = tokens.next().unwrap_or("");
        let name = head.strip_prefix(BEHAVIOR_MARKER).unwrap_or(head);
        let mut params = tokens.map(str::to_string);

        match name {
            "trans" => Self::Transparent,
            "kp" => Self::KeyPress {
                key: params.next().unwrap_or_default(),
            },
            "mo" => match params.next() {
                Some(layer) if layer.chars().all(|c| c.is_ascii_digit()) => {
                    Self::MomentaryLayer { layer }
                }
                param => Self::Unknown {
                    name: name.to_string(),
                    param,
                },
            },
            "bt" => Self::Bluetooth {
                action: params.next().unwrap_or_default(),
                target: params.next(),
            },
            _ => Self::Unknown {
                name: name.to_string(),
                param: params.next(),
            },
        }
    }
}

/// Resolves a binding expression to its display legend and key code.
///
/// Total over arbitrary input: every expression yields a legend (possibly
/// empty) and resolution never fails. Repeated calls on the same input
/// return identical output.
///
/// # Examples
///
/// ```
/// use zmklens::bindings::resolve;
///
/// assert_eq!(resolve("&kp N1").legend, "1");
/// assert_eq!(resolve("&kp A").key_code, Some(30));
/// assert_eq!(resolve("&mo 1").legend, "MO1");
/// assert!(resolve("&trans").key_code.is_none());
/// ```
#[must_use]
pub fn resolve(expression: &str) -> ResolvedBinding {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return ResolvedBinding::legend_only(String::new());
    }

    match Behavior::parse(trimmed) {
        Behavior::Transparent => ResolvedBinding::legend_only(TRANSPARENT_LEGEND),
        Behavior::KeyPress { key } => ResolvedBinding {
            legend: tables::legend_for(&key).map_or_else(|| key.clone(), str::to_string),
            key_code: tables::code_for(&key),
        },
        Behavior::MomentaryLayer { layer } => {
            ResolvedBinding::legend_only(format!("{MOMENTARY_LEGEND_PREFIX}{layer}"))
        }
        Behavior::Bluetooth { action, target } => {
            ResolvedBinding::legend_only(bluetooth_legend(&action, target.as_deref()))
        }
        Behavior::Unknown { name, param } => {
            ResolvedBinding::legend_only(fallback_legend(trimmed, &name, param.as_deref()))
        }
    }
}

/// Composes the legend for a bluetooth sub-command.
///
/// Profile selection shows the profile number; other recognized
/// sub-commands map through a fixed table; anything else falls back to the
/// bare family prefix.
fn bluetooth_legend(action: &str, target: Option<&str>) -> String {
    if action == "BT_SEL" {
        if let Some(profile) = target {
            return format!("{BLUETOOTH_LEGEND_PREFIX} {profile}");
        }
    }

    tables::bluetooth_action_legend(action)
        .map_or_else(|| BLUETOOTH_LEGEND_PREFIX.to_string(), str::to_string)
}

/// Best-effort legend for behaviors outside the recognized set.
///
/// Fixed whole-expression literals win first; everything else becomes the
/// uppercased behavior name with its first parameter, when present.
fn fallback_legend(expression: &str, name: &str, param: Option<&str>) -> String {
    if let Some(fixed) = tables::fixed_legend(expression) {
        return fixed.to_string();
    }

    match param {
        Some(param) => format!("{} {param}", name.to_uppercase()),
        None => name.to_uppercase(),
    }
}
