//! ZMK keymap (`.keymap`) parsing.
//!
//! A keymap declares one or more layers, each an ordered list of binding
//! expressions. The format has no explicit default marker; the first layer
//! in declaration order is the default.

use regex::Regex;

use crate::constants::BEHAVIOR_MARKER;
use crate::models::{Keymap, Layer};
use crate::parser::blocks::block_body;
use crate::parser::{title_case_identifier, ParseError};

/// Parses every layer from stripped keymap source text.
///
/// # File Format
///
/// ```text
/// keymap {
///     compatible = "zmk,keymap";
///
///     default_layer {
///         bindings = <
///             &kp TAB   &kp Q  &kp W
///             &mo 1     &kp A  &kp S
///         >;
///     };
///
///     lower_layer {
///         bindings = <
///             &trans    &kp N1  &kp N2
///             &trans    &bt BT_CLR  &kp N3
///         >;
///     };
/// };
/// ```
///
/// Binding expressions are kept as raw strings: a `&`-prefixed token opens
/// an expression and following plain tokens are its parameters, so the
/// blob above yields `"&kp TAB"`, `"&kp Q"` and so on. Layer display names
/// come from the identifier: `lower_layer` becomes "Lower". The keymap
/// itself is named after `source_name`, normally the originating file's
/// base name; content carries no name of its own.
///
/// # Errors
///
/// Returns [`ParseError::NoLayersFound`] when the source contains no layer
/// nodes, or when every layer it does contain has zero bindings.
pub fn parse_keymap(text: &str, source_name: &str) -> Result<Keymap, ParseError> {
    let layer_regex = Regex::new(r"([A-Za-z_][A-Za-z0-9_]*_layer)\s*\{").unwrap();

    let mut layers = Vec::new();
    for header in layer_regex.captures_iter(text) {
        let name = header[1].to_string();

        let open = header.get(0).map_or(0, |m| m.end() - 1);
        let Some((body, _)) = block_body(text, open) else {
            continue;
        };

        let display_name = title_case_identifier(name.strip_suffix("_layer").unwrap_or(&name));
        let mut layer = Layer::new(name, display_name);
        layer.bindings = parse_bindings(body);
        layers.push(layer);
    }

    if layers.is_empty() || layers.iter().all(|layer| layer.bindings.is_empty()) {
        return Err(ParseError::NoLayersFound {
            source_name: source_name.to_string(),
        });
    }

    Ok(Keymap {
        name: source_name.to_string(),
        layers,
    })
}

/// Splits a layer body's `bindings = < ... >` blob into raw expressions.
///
/// Whitespace runs collapse to single spaces, so multi-line cells come out
/// as `"&kp TAB"` regardless of source alignment. Tokens before the first
/// marker are dropped.
fn parse_bindings(body: &str) -> Vec<String> {
    let bindings_regex = Regex::new(r"bindings\s*=\s*<([^>]*)>").unwrap();
    let Some(blob) = bindings_regex.captures(body) else {
        return Vec::new();
    };

    let mut bindings: Vec<String> = Vec::new();
    for token in blob[1].split_whitespace() {
        if token.starts_with(BEHAVIOR_MARKER) {
            bindings.push(token.to_string());
        } else if let Some(current) = bindings.last_mut() {
            current.push(' ');
            current.push_str(token);
        }
    }

    bindings
}
