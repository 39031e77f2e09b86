//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default physical layout file
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Default keymap file
    #[arg(long, value_name = "FILE")]
    keymap: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    config_file: String,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keymap_file: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let config_path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;

        if self.json {
            let output = ConfigOutput {
                paths: PathsOutput {
                    layout_file: config
                        .paths
                        .layout_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string()),
                    keymap_file: config
                        .paths
                        .keymap_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string()),
                },
                config_file: config_path.to_string_lossy().to_string(),
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("{APP_NAME} Configuration");
        println!("======================");
        println!();

        println!("Paths:");
        match &config.paths.layout_file {
            Some(path) => println!("  Layout file: {}", path.display()),
            None => println!("  Layout file: (not configured)"),
        }
        match &config.paths.keymap_file {
            Some(path) => println!("  Keymap file: {}", path.display()),
            None => println!("  Keymap file: (not configured)"),
        }

        let note = if Config::exists() { "" } else { " (not saved yet)" };
        println!();
        println!("Config file: {}{}", config_path.display(), note);

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.layout.is_none() && self.keymap.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --layout or --keymap",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        // Validate and apply layout path if provided
        if let Some(path) = &self.layout {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Layout file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.layout_file = Some(path.clone());
        }

        // Validate and apply keymap path if provided
        if let Some(path) = &self.keymap {
            if !path.is_file() {
                return Err(CliError::validation(format!(
                    "Keymap file does not exist: {}",
                    path.display()
                )));
            }
            config.paths.keymap_file = Some(path.clone());
        }

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}
