//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Environment variable naming the directory the binary reads its
/// configuration from. Set it on every child command so tests never touch
/// real user configuration, regardless of platform.
pub const CONFIG_DIR_ENV: &str = zmklens::constants::CONFIG_DIR_ENV;

/// Physical layout source for "Typhon", a 3x2+2 unibody test board.
///
/// Eight keys in centi-key units: two three-key rows and a rotated thumb
/// pair. Includes comments so every consumer exercises comment stripping.
pub const TYPHON_LAYOUT: &str = r#"/*
 * Typhon: a 3x2+2 unibody test board.
 */
#include <physical_layouts.dtsi>

/ {
    typhon_layout: typhon_layout_0 {
        compatible = "zmk,physical-layout";
        display-name = "Typhon";

        keys  //  w   h    x    y     rot   rx   ry
            = <
                &key_physical_attrs 100 100   0    0      0    0    0
                &key_physical_attrs 100 100 100    0      0    0    0
                &key_physical_attrs 100 100 200    0      0    0    0
                &key_physical_attrs 100 100   0  100      0    0    0
                &key_physical_attrs 100 100 100  100      0    0    0
                &key_physical_attrs 100 100 200  100      0    0    0
                &key_physical_attrs 100 100 120  210    700  170  260
                &key_physical_attrs 100 100 230  210 (-700)  280  260
            >;
    };
};
"#;

/// Keymap source matching [`TYPHON_LAYOUT`]: two layers of eight bindings.
///
/// The default layer covers key presses, a transparent slot, and a
/// momentary layer switch; the lower layer covers the bluetooth family and
/// fixed literal behaviors.
pub const TYPHON_KEYMAP: &str = r#"#include <behaviors.dtsi>
#include <dt-bindings/zmk/bt.h>
#include <dt-bindings/zmk/keys.h>

/ {
    keymap {
        compatible = "zmk,keymap";

        default_layer {
            bindings = <
                &kp TAB  &kp A      &kp B
                &kp C    &trans     &kp D
                &mo 1    &kp SPACE
            >;
        };

        lower_layer {
            bindings = <
                &bt BT_CLR  &bt BT_SEL 0  &kp N1
                &sys_reset  &bootloader   &kp N2
                &trans      &kp ESC
            >;
        };
    };
};
"#;

/// Keymap whose default layer has fewer bindings than Typhon has keys.
///
/// Used for coverage-mismatch scenarios: three bindings against eight
/// positions.
pub const TYPHON_SHORT_KEYMAP: &str = r"/ {
    keymap {
        default_layer {
            bindings = <&kp Q &kp W &kp E>;
        };
    };
};
";

/// Expected legends for [`TYPHON_KEYMAP`]'s default layer, in key order.
pub const TYPHON_DEFAULT_LEGENDS: [&str; 8] = ["TAB", "A", "B", "C", "▽", "D", "MO1", "SPACE"];

/// Writes a layout/keymap source pair into a temp directory.
///
/// # Returns
/// The layout path, the keymap path, and the directory guard. Keep the
/// guard alive for as long as the paths are used.
pub fn write_board_files(layout_source: &str, keymap_source: &str) -> (PathBuf, PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("typhon.dtsi");
    let keymap_path = temp_dir.path().join("typhon.keymap");
    fs::write(&layout_path, layout_source).expect("Failed to write layout file");
    fs::write(&keymap_path, keymap_source).expect("Failed to write keymap file");
    (layout_path, keymap_path, temp_dir)
}

/// Writes the Typhon board pair into a temp directory.
pub fn typhon_board_files() -> (PathBuf, PathBuf, TempDir) {
    write_board_files(TYPHON_LAYOUT, TYPHON_KEYMAP)
}

/// Creates a config directory whose `config.toml` points at a Typhon board
/// pair stored alongside it.
///
/// Pass the returned directory as [`CONFIG_DIR_ENV`] to a child process so
/// it resolves the pair without command-line paths.
pub fn config_home_with_typhon_board() -> TempDir {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    let layout_path = config_home.path().join("typhon.dtsi");
    let keymap_path = config_home.path().join("typhon.keymap");
    fs::write(&layout_path, TYPHON_LAYOUT).expect("Failed to write layout file");
    fs::write(&keymap_path, TYPHON_KEYMAP).expect("Failed to write keymap file");

    let config = format!(
        "[paths]\nlayout_file = \"{}\"\nkeymap_file = \"{}\"\n",
        layout_path.display(),
        keymap_path.display()
    );
    fs::write(config_home.path().join("config.toml"), config)
        .expect("Failed to write config file");

    config_home
}

/// Creates an empty config directory with no `config.toml`.
///
/// Pass the returned directory as [`CONFIG_DIR_ENV`] to isolate a child
/// process from any real user configuration.
pub fn empty_config_home() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[cfg(test)]
mod tests {
    use super::*;
    use zmklens::services::LayoutService;

    #[test]
    fn test_fixture_board_compiles() {
        let board = LayoutService::compile(TYPHON_LAYOUT, TYPHON_KEYMAP, "typhon")
            .expect("Fixture sources should compile");
        assert_eq!(board.model.display_name, "Typhon");
        assert_eq!(board.model.key_count(), 8);
        assert_eq!(board.keymap.layers.len(), 2);
    }

    #[test]
    fn test_fixture_legends_match_expectation() {
        let board = LayoutService::compile(TYPHON_LAYOUT, TYPHON_KEYMAP, "typhon")
            .expect("Fixture sources should compile");
        let legends: Vec<&str> = board
            .model
            .keys
            .iter()
            .map(|key| key.binding.legend.as_str())
            .collect();
        assert_eq!(legends, TYPHON_DEFAULT_LEGENDS);
    }

    #[test]
    fn test_fixture_files_exist() {
        let (layout_path, keymap_path, _temp) = typhon_board_files();
        assert!(layout_path.is_file());
        assert!(keymap_path.is_file());
    }

    #[test]
    fn test_fixture_config_home_layout() {
        let config_home = config_home_with_typhon_board();
        assert!(config_home.path().join("config.toml").is_file());
        assert!(config_home.path().join("typhon.dtsi").is_file());
    }
}
