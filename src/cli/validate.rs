//! Validation command for layout and keymap sources.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationCounts, ValidationMessage, ValidationResponse,
};
use crate::parser;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Validate a layout/keymap source pair for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the physical layout file
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Path to the keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let layout_text = fs::read_to_string(&self.layout)
            .map_err(|e| CliError::io(format!("Failed to read layout file: {e}")))?;
        let keymap_text = fs::read_to_string(&self.keymap)
            .map_err(|e| CliError::io(format!("Failed to read keymap file: {e}")))?;

        let source_name = self
            .keymap
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("keymap");

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();
        let mut counts = ValidationCounts::default();

        let layout_ok = match parser::parse_physical_layout(&parser::strip_comments(&layout_text))
        {
            Ok(layout) => {
                counts.keys = layout.key_count();
                true
            }
            Err(error) => {
                checks.layout = "failed".to_string();
                messages.push(ValidationMessage {
                    severity: "error".to_string(),
                    message: error.to_string(),
                });
                false
            }
        };

        let keymap_ok =
            match parser::parse_keymap(&parser::strip_comments(&keymap_text), source_name) {
                Ok(keymap) => {
                    counts.layers = keymap.layers.len();
                    counts.bindings = keymap
                        .default_layer()
                        .map_or(0, |layer| layer.binding_count());
                    true
                }
                Err(error) => {
                    checks.keymap = "failed".to_string();
                    messages.push(ValidationMessage {
                        severity: "error".to_string(),
                        message: error.to_string(),
                    });
                    false
                }
            };

        // Coverage: default layer bindings versus key positions.
        if layout_ok && keymap_ok {
            if counts.bindings != counts.keys {
                checks.coverage = "warning".to_string();
                messages.push(ValidationMessage {
                    severity: "warning".to_string(),
                    message: format!(
                        "default layer has {} bindings for {} key positions",
                        counts.bindings, counts.keys
                    ),
                });
            }
        } else {
            checks.coverage = "skipped".to_string();
        }

        let valid = messages.iter().all(|message| message.severity != "error");
        let response = ValidationResponse {
            valid,
            errors: messages,
            checks,
            counts,
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            println!("\nChecks:");
            println!("  Layout:   {}", response.checks.layout);
            println!("  Keymap:   {}", response.checks.keymap);
            println!("  Coverage: {}", response.checks.coverage);

            println!("\nCounts:");
            println!("  Keys:     {}", response.counts.keys);
            println!("  Layers:   {}", response.counts.layers);
            println!("  Bindings: {}", response.counts.bindings);

            if !response.errors.is_empty() {
                println!("\nIssues:");
                for message in &response.errors {
                    let prefix = if message.severity == "error" {
                        "  ✗"
                    } else {
                        "  ⚠"
                    };
                    println!("{} {}", prefix, message.message);
                }
            }
        }

        // Exit code
        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict
            && response
                .errors
                .iter()
                .any(|message| message.severity == "warning")
        {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
