//! Layout loading and compilation service.
//!
//! This module centralizes the parse-then-compile pipeline and the file I/O
//! around it, so every caller resolves sources and reports failures the same
//! way.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{KeyboardLayoutModel, Keymap, PhysicalLayout};
use crate::parser::{self, ParseError};
use crate::services::model::build_layout_model;

/// Embedded fallback board sources, compiled when no usable files are
/// supplied.
const DEFAULT_LAYOUT_SOURCE: &str = include_str!("../data/default_layout.dtsi");
const DEFAULT_KEYMAP_SOURCE: &str = include_str!("../data/default.keymap");

/// Name reported for the embedded fallback keymap.
const DEFAULT_SOURCE_NAME: &str = "built-in";

/// Parsed documents plus the compiled model for one source pair.
#[derive(Debug, Clone)]
pub struct CompiledBoard {
    /// Parsed physical layout document
    pub layout: PhysicalLayout,
    /// Parsed keymap document
    pub keymap: Keymap,
    /// Compiled renderable model
    pub model: KeyboardLayoutModel,
}

/// Service for turning ZMK layout and keymap sources into renderable models.
///
/// The pipeline is pure once the text is in hand; only the `load` variants
/// touch the file system.
pub struct LayoutService;

impl LayoutService {
    /// Compiles already-read source text.
    ///
    /// Comments are stripped from both sources before parsing. The keymap
    /// takes its name from `source_name` since the format itself carries no
    /// name.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when either source fails to parse. Binding
    /// resolution never fails; unrecognized expressions degrade to textual
    /// legends.
    pub fn compile(
        layout_text: &str,
        keymap_text: &str,
        source_name: &str,
    ) -> Result<CompiledBoard, ParseError> {
        let layout = parser::parse_physical_layout(&parser::strip_comments(layout_text))?;
        let keymap = parser::parse_keymap(&parser::strip_comments(keymap_text), source_name)?;

        debug!(
            "compiled '{}': {} keys, {} layers",
            layout.display_name,
            layout.key_count(),
            keymap.layers.len()
        );

        let model = build_layout_model(&layout, &keymap);

        Ok(CompiledBoard {
            layout,
            keymap,
            model,
        })
    }

    /// Loads and compiles a physical layout / keymap file pair.
    ///
    /// The keymap name is derived from the keymap file's base name.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use zmklens::services::LayoutService;
    ///
    /// let board = LayoutService::load(Path::new("corne.dtsi"), Path::new("corne.keymap"))?;
    /// println!("{}: {} keys", board.model.display_name, board.model.key_count());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(layout_path: &Path, keymap_path: &Path) -> Result<CompiledBoard> {
        let layout_text = fs::read_to_string(layout_path)
            .with_context(|| format!("Failed to read layout file: {}", layout_path.display()))?;
        let keymap_text = fs::read_to_string(keymap_path)
            .with_context(|| format!("Failed to read keymap file: {}", keymap_path.display()))?;

        let source_name = keymap_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("keymap");

        Self::compile(&layout_text, &keymap_text, source_name)
            .with_context(|| format!("Failed to compile layout from {}", layout_path.display()))
    }

    /// Loads a file pair, substituting the embedded board on any failure.
    ///
    /// A parse or read failure is logged and never surfaced to the caller;
    /// the returned error can only come from the embedded sources themselves.
    pub fn load_or_default(layout_path: &Path, keymap_path: &Path) -> Result<CompiledBoard> {
        match Self::load(layout_path, keymap_path) {
            Ok(board) => Ok(board),
            Err(error) => {
                warn!("Falling back to the built-in layout: {error:#}");
                Self::default_board()
            }
        }
    }

    /// Compiles the embedded fallback board.
    pub fn default_board() -> Result<CompiledBoard> {
        Self::compile(
            DEFAULT_LAYOUT_SOURCE,
            DEFAULT_KEYMAP_SOURCE,
            DEFAULT_SOURCE_NAME,
        )
        .context("Failed to compile the built-in layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LAYOUT: &str = r#"
typhon_layout: typhon_layout_0 {
    display-name = "Typhon";
    keys = <
        &key_physical_attrs 100 100   0 0 0 0 0  /* col 0 */
        &key_physical_attrs 100 100 100 0 0 0 0
    >;
};
"#;

    const KEYMAP: &str = r"
default_layer {
    bindings = <&kp Q &kp W>;
};
";

    #[test]
    fn test_compile_inline_sources() {
        let board = LayoutService::compile(LAYOUT, KEYMAP, "inline").unwrap();
        assert_eq!(board.layout.name, "typhon_layout");
        assert_eq!(board.keymap.name, "inline");
        assert_eq!(board.model.display_name, "Typhon");
        assert_eq!(board.model.key_count(), 2);
        assert_eq!(board.model.keys[0].binding.legend, "Q");
        assert_eq!(board.model.keys[1].binding.legend, "W");
    }

    #[test]
    fn test_compile_bad_layout_errors() {
        let result = LayoutService::compile("not a layout", KEYMAP, "inline");
        assert_eq!(result.unwrap_err(), ParseError::NoPhysicalLayoutBlock);
    }

    #[test]
    fn test_load_from_files() {
        let dir = TempDir::new().unwrap();
        let layout_path = dir.path().join("typhon.dtsi");
        let keymap_path = dir.path().join("typhon.keymap");
        fs::write(&layout_path, LAYOUT).unwrap();
        fs::write(&keymap_path, KEYMAP).unwrap();

        let board = LayoutService::load(&layout_path, &keymap_path).unwrap();
        assert_eq!(board.model.display_name, "Typhon");
        assert_eq!(board.keymap.name, "typhon");
        assert_eq!(board.model.key_count(), 2);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.dtsi");
        let keymap_path = dir.path().join("typhon.keymap");
        fs::write(&keymap_path, KEYMAP).unwrap();

        let error = LayoutService::load(&missing, &keymap_path).unwrap_err();
        assert!(error.to_string().contains("Failed to read layout file"));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = TempDir::new().unwrap();
        let board = LayoutService::load_or_default(
            &dir.path().join("missing.dtsi"),
            &dir.path().join("missing.keymap"),
        )
        .unwrap();

        assert_eq!(board.model.display_name, "Lens 34");
        assert_eq!(board.model.key_count(), 34);
    }

    #[test]
    fn test_default_board_compiles() {
        let board = LayoutService::default_board().unwrap();
        assert_eq!(board.model.display_name, "Lens 34");
        assert_eq!(board.model.key_count(), 34);
        assert_eq!(board.keymap.layer_names(), vec!["Default", "Lower", "Raise"]);

        // Default layer: QWERTY rows plus momentary thumbs.
        assert_eq!(board.model.keys[0].binding.legend, "Q");
        assert_eq!(board.model.keys[30].binding.legend, "MO1");
        assert_eq!(board.model.keys[33].binding.legend, "MO2");
    }
}
