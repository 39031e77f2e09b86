//! Legend command for resolving binding expressions.

use crate::bindings::{self, PlatformKeyCode};
use crate::cli::common::{CliError, CliResult};
use clap::Args;
use serde::Serialize;

/// Resolve binding expressions to display legends and key codes
#[derive(Debug, Clone, Args)]
pub struct LegendArgs {
    /// Binding expressions to resolve (e.g. "&kp GRAVE" "&mo 1")
    #[arg(value_name = "EXPRESSION", required = true)]
    pub expressions: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One resolved expression in the JSON output.
#[derive(Debug, Serialize)]
struct LegendEntry<'a> {
    expression: &'a str,
    legend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_code: Option<PlatformKeyCode>,
}

impl LegendArgs {
    /// Execute the legend command
    pub fn execute(&self) -> CliResult<()> {
        let entries: Vec<LegendEntry> = self
            .expressions
            .iter()
            .map(|expression| {
                let resolved = bindings::resolve(expression);
                LegendEntry {
                    expression,
                    legend: resolved.legend,
                    key_code: resolved.key_code,
                }
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for entry in &entries {
            match entry.key_code {
                Some(code) => println!("{}  ->  {} (code {})", entry.expression, entry.legend, code),
                None => println!("{}  ->  {}", entry.expression, entry.legend),
            }
        }

        Ok(())
    }
}
