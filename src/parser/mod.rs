//! Parsers for ZMK configuration sources.
//!
//! Both parsers expect text that has already been through
//! [`strip_comments`]; they perform no file I/O of their own. A parse either
//! yields a complete value or a [`ParseError`], never a partial result.

mod blocks;
pub mod comments;
pub mod keymap;
pub mod physical;

pub use comments::strip_comments;
pub use keymap::parse_keymap;
pub use physical::parse_physical_layout;

use thiserror::Error;

/// Errors raised while parsing layout or keymap sources.
///
/// Every variant is terminal for the parse attempt. Callers log the error
/// and substitute the built-in default layout; a malformed user file must
/// never take the application down.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No `<name>_layout : <name>_layout_<n>` node was found in the source.
    #[error("no physical layout block found in source")]
    NoPhysicalLayoutBlock,

    /// The layout block yielded zero parsable key geometry records.
    #[error("layout '{layout}' contains no valid key position records")]
    InvalidKeyAttributes {
        /// Label of the layout block the records were expected in.
        layout: String,
    },

    /// The keymap source yielded no layers, or only layers without bindings.
    #[error("no keymap layers with bindings found in '{source_name}'")]
    NoLayersFound {
        /// Identifier of the keymap source being parsed.
        source_name: String,
    },
}

/// Title-cases a device-tree identifier fragment for display.
///
/// Underscores become spaces and each word gets an uppercase first letter:
/// `lower_mods` becomes "Lower Mods". Used for layout and layer display
/// names when the source provides no explicit one.
#[must_use]
pub(crate) fn title_case_identifier(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
