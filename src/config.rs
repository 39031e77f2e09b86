//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_ENV;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Physical layout source opened when no path is given (a ZMK `.dtsi` file)
    pub layout_file: Option<PathBuf>,
    /// Keymap source opened when no path is given (a ZMK `.keymap` file)
    pub keymap_file: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ZmkLens/config.toml`
/// - macOS: `~/Library/Application Support/ZmkLens/config.toml`
/// - Windows: `%APPDATA%\ZmkLens\config.toml`
///
/// Setting `ZMKLENS_CONFIG_DIR` overrides the platform location; the file
/// then lives at `$ZMKLENS_CONFIG_DIR/config.toml`.
///
/// # Validation
///
/// Both source paths are optional; when set, each must point to an existing
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path().is_ok_and(|path| path.exists())
    }

    /// Checks if the configuration names a complete source pair.
    ///
    /// Used to decide whether the config can supply sources when the caller
    /// gives no paths on the command line.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.paths.layout_file.is_some() && self.paths.keymap_file.is_some()
    }

    /// Gets the configured layout/keymap pair, if both paths are set.
    #[must_use]
    pub fn source_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.paths.layout_file, &self.paths.keymap_file) {
            (Some(layout), Some(keymap)) => Some((layout.as_path(), keymap.as_path())),
            _ => None,
        }
    }

    /// Gets the platform-specific config directory path.
    ///
    /// A `ZMKLENS_CONFIG_DIR` environment variable wins over the platform
    /// location and is used verbatim, without an app subdirectory.
    ///
    /// - Linux: `~/.config/ZmkLens/`
    /// - macOS: `~/Library/Application Support/ZmkLens/`
    /// - Windows: `%APPDATA%\ZmkLens\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ZmkLens");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Each configured source path must point to an existing file.
    pub fn validate(&self) -> Result<()> {
        if let Some(layout_file) = &self.paths.layout_file {
            if !layout_file.is_file() {
                anyhow::bail!("Layout file does not exist: {}", layout_file.display());
            }
        }

        if let Some(keymap_file) = &self.paths.keymap_file {
            if !keymap_file.is_file() {
                anyhow::bail!("Keymap file does not exist: {}", keymap_file.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.layout_file, None);
        assert_eq!(config.paths.keymap_file, None);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_config_is_configured() {
        let mut config = Config::new();
        assert!(!config.is_configured());

        config.paths.layout_file = Some(PathBuf::from("/some/board.dtsi"));
        assert!(!config.is_configured());

        config.paths.keymap_file = Some(PathBuf::from("/some/board.keymap"));
        assert!(config.is_configured());
    }

    #[test]
    fn test_source_paths_requires_both() {
        let mut config = Config::new();
        assert_eq!(config.source_paths(), None);

        config.paths.layout_file = Some(PathBuf::from("/some/board.dtsi"));
        assert_eq!(config.source_paths(), None);

        config.paths.keymap_file = Some(PathBuf::from("/some/board.keymap"));
        let (layout, keymap) = config.source_paths().unwrap();
        assert_eq!(layout, Path::new("/some/board.dtsi"));
        assert_eq!(keymap, Path::new("/some/board.keymap"));
    }

    #[test]
    fn test_config_validate_default() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_validate_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = Config::new();
        config.paths.layout_file = Some(temp_dir.path().join("missing.dtsi"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let layout_path = temp_dir.path().join("board.dtsi");
        let keymap_path = temp_dir.path().join("board.keymap");
        fs::write(&layout_path, "").unwrap();
        fs::write(&keymap_path, "").unwrap();

        let mut config = Config::new();
        config.paths.layout_file = Some(layout_path);
        config.paths.keymap_file = Some(keymap_path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.paths.layout_file = Some(PathBuf::from("/boards/corne.dtsi"));

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }
}
