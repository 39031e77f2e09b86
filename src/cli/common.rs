//! Shared CLI infrastructure: errors, exit codes, and source resolution.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::config::Config;
use crate::services::{CompiledBoard, LayoutService};

/// Process exit codes reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success,
    /// Input failed a validation check
    ValidationFailure,
    /// File system or environment failure
    IoFailure,
}

impl ExitCode {
    /// Gets the numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::ValidationFailure => 1,
            Self::IoFailure => 2,
        }
    }
}

/// Errors produced by CLI command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// File system or environment failure
    #[error("{0}")]
    Io(String),
    /// Input failed a validation check
    #[error("{0}")]
    Validation(String),
}

impl CliError {
    /// Creates an I/O error with the given message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Gets the exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::IoFailure,
            Self::Validation(_) => ExitCode::ValidationFailure,
        }
    }
}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Resolves and compiles board sources for a command.
///
/// Explicit paths win; otherwise the config file's source pair is used when
/// set, and the embedded board covers the zero-config case.
pub fn load_board(
    layout_path: Option<&Path>,
    keymap_path: Option<&Path>,
) -> CliResult<CompiledBoard> {
    match (layout_path, keymap_path) {
        (Some(layout), Some(keymap)) => LayoutService::load(layout, keymap)
            .map_err(|e| CliError::io(format!("Failed to load board: {e}"))),
        (None, None) => {
            let config = Config::load().unwrap_or_default();
            let board = match config.source_paths() {
                Some((layout, keymap)) => LayoutService::load_or_default(layout, keymap),
                None => LayoutService::default_board(),
            };
            board.map_err(|e| CliError::io(format!("Failed to load board: {e}")))
        }
        _ => Err(CliError::validation(
            "--layout and --keymap must be given together",
        )),
    }
}

/// Per-check outcomes reported by `validate`.
#[derive(Debug, Serialize)]
pub struct ValidationChecks {
    /// Physical layout document parse
    pub layout: String,
    /// Keymap document parse
    pub keymap: String,
    /// Binding-to-position coverage
    pub coverage: String,
}

impl ValidationChecks {
    /// Creates a check set with every check marked passed.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            layout: "passed".to_string(),
            keymap: "passed".to_string(),
            coverage: "passed".to_string(),
        }
    }
}

/// One validation finding.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Human-readable description
    pub message: String,
}

/// Document statistics reported by `validate`.
#[derive(Debug, Default, Serialize)]
pub struct ValidationCounts {
    /// Key position records in the physical layout
    pub keys: usize,
    /// Layers in the keymap
    pub layers: usize,
    /// Bindings on the default layer
    pub bindings: usize,
}

/// Top-level response for `validate`.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when no errors were found
    pub valid: bool,
    /// Errors and warnings in discovery order
    pub errors: Vec<ValidationMessage>,
    /// Per-check outcomes
    pub checks: ValidationChecks,
    /// Document statistics
    pub counts: ValidationCounts,
}
