//! Application-wide constants.
//!
//! This module defines constants used throughout the application, including
//! the application name and the unit conversions applied when composing the
//! renderable layout model.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ZMK Lens";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "zmklens";

/// Environment variable overriding the configuration directory.
///
/// When set, the config file lives directly in the named directory instead
/// of the platform config location. Works on every platform, so tests use
/// it to isolate child processes from real user configuration.
pub const CONFIG_DIR_ENV: &str = "ZMKLENS_CONFIG_DIR";

/// Output units per centi-key unit when scaling key frames.
///
/// Physical layout sources measure keys in centi-key units (100 units equals
/// one standard keycap width), so one keycap maps to 40 output units.
pub const RENDER_SCALE: f32 = 0.4;

/// Padding added to each axis of the composed model's bounding size, in
/// output units.
pub const MODEL_PADDING: f32 = 10.0;

/// Bounding width used when a physical layout contributes no keys.
pub const DEFAULT_MODEL_WIDTH: f32 = 320.0;

/// Bounding height used when a physical layout contributes no keys.
pub const DEFAULT_MODEL_HEIGHT: f32 = 120.0;

/// The transparent binding expression, substituted for key positions that
/// have no binding at the corresponding index.
pub const TRANSPARENT_BINDING: &str = "&trans";

/// Legend shown for transparent bindings (pass-through to a lower layer).
pub const TRANSPARENT_LEGEND: &str = "▽";

/// Marker character introducing every binding expression.
pub const BEHAVIOR_MARKER: char = '&';
