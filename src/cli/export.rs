//! Export command for writing compiled models as JSON.

use crate::cli::common::{load_board, CliError, CliResult};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export the compiled keyboard layout model as JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to the physical layout file
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Path to the keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Output path for the JSON file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let board = load_board(self.layout.as_deref(), self.keymap.as_deref())?;

        let json = serde_json::to_string_pretty(&board.model)
            .map_err(|e| CliError::io(format!("Failed to serialize model: {e}")))?;

        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                println!("✓ Exported model to: {}", path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
