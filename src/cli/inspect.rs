//! Inspect command for compiled board summaries.

use crate::cli::common::{load_board, CliError, CliResult};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Inspect a compiled keyboard layout model
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the physical layout file
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Path to the keymap file
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// List every key with its legend and frame
    #[arg(long)]
    pub keys: bool,
}

/// One keymap layer in the JSON summary.
#[derive(Debug, Serialize)]
struct LayerSummary<'a> {
    name: &'a str,
    display_name: &'a str,
    bindings: usize,
}

/// JSON response for `inspect --json`.
#[derive(Debug, Serialize)]
struct InspectResponse<'a> {
    display_name: &'a str,
    key_count: usize,
    width: f32,
    height: f32,
    layers: Vec<LayerSummary<'a>>,
    legends: Vec<&'a str>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let board = load_board(self.layout.as_deref(), self.keymap.as_deref())?;
        let model = &board.model;

        if self.json {
            let response = InspectResponse {
                display_name: &model.display_name,
                key_count: model.key_count(),
                width: model.width,
                height: model.height,
                layers: board
                    .keymap
                    .layers
                    .iter()
                    .map(|layer| LayerSummary {
                        name: &layer.name,
                        display_name: &layer.display_name,
                        bindings: layer.binding_count(),
                    })
                    .collect(),
                legends: model
                    .keys
                    .iter()
                    .map(|key| key.binding.legend.as_str())
                    .collect(),
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("{}", model.display_name);
        println!("  Keys:   {}", model.key_count());
        println!("  Size:   {:.1} x {:.1}", model.width, model.height);
        println!("  Layers: {}", board.keymap.layers.len());
        for layer in &board.keymap.layers {
            println!(
                "    {} ({} bindings)",
                layer.display_name,
                layer.binding_count()
            );
        }

        if self.keys {
            println!();
            println!("  Index  Legend          Frame");
            for key in &model.keys {
                println!(
                    "  {:>5}  {:<14}  ({:.1}, {:.1}) {:.1} x {:.1}",
                    key.position.index,
                    key.binding.legend,
                    key.frame.x,
                    key.frame.y,
                    key.frame.width,
                    key.frame.height,
                );
            }
        }

        Ok(())
    }
}
