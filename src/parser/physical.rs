//! ZMK physical layout (`.dtsi`) parsing.
//!
//! A physical layout is a device-tree node describing where every key sits,
//! in centi-key units (100 = one keycap width). This module extracts the
//! first layout node from stripped source text.

use regex::Regex;

use crate::models::{KeyPosition, PhysicalLayout};
use crate::parser::blocks::block_body;
use crate::parser::{title_case_identifier, ParseError};

/// Parses the first physical layout node from stripped source text.
///
/// # File Format
///
/// ```text
/// typhon_layout: typhon_layout_0 {
///     compatible = "zmk,physical-layout";
///     display-name = "Typhon";
///     keys = <
///         &key_physical_attrs 100 100    0   38       0     0     0
///         &key_physical_attrs 100 100  100   13  (-700)   350    13
///     >;
/// };
/// ```
///
/// Each `&key_physical_attrs` record carries exactly seven integers: width,
/// height, x, y, rotation, rotation-x, rotation-y. Negative values are
/// parenthesized in the source. When the node has no `display-name`
/// property, a name is derived from the label (`typhon_layout` becomes
/// "Typhon"). Records keep their file order and are indexed from zero.
/// Properties are read from the layout node itself; the same property
/// inside a child node is ignored.
///
/// # Errors
///
/// Returns [`ParseError::NoPhysicalLayoutBlock`] when no layout node is
/// present, and [`ParseError::InvalidKeyAttributes`] when the node yields
/// zero geometry records.
pub fn parse_physical_layout(text: &str) -> Result<PhysicalLayout, ParseError> {
    // Label on the left, instance node name on the right: name_layout: name_layout_0 {
    let header_regex =
        Regex::new(r"([A-Za-z_][A-Za-z0-9_]*_layout)\s*:\s*[A-Za-z_][A-Za-z0-9_]*_layout_\d+\s*\{")
            .unwrap();

    let header = header_regex
        .captures(text)
        .ok_or(ParseError::NoPhysicalLayoutBlock)?;
    let name = header[1].to_string();

    // The opening brace is the last byte of the header match.
    let open = header.get(0).map_or(0, |m| m.end() - 1);
    let (body, _) = block_body(text, open).ok_or(ParseError::NoPhysicalLayoutBlock)?;
    let own_text = own_node_text(body);

    let display_name = parse_display_name(&own_text).unwrap_or_else(|| {
        let base = name.strip_suffix("_layout").unwrap_or(&name);
        title_case_identifier(base)
    });

    let keys = parse_key_records(&own_text);
    if keys.is_empty() {
        return Err(ParseError::InvalidKeyAttributes { layout: name });
    }

    Ok(PhysicalLayout {
        name,
        display_name,
        keys,
    })
}

/// Returns a node body with every child block's contents removed.
///
/// Device-tree properties belong to the nearest enclosing node, so a
/// `display-name` or `keys` inside a child must not be read as the layout's
/// own. Braces inside double-quoted strings do not open or close a child.
fn own_node_text(body: &str) -> String {
    let mut own = String::with_capacity(body.len());
    let mut depth = 0usize;
    let mut in_string = false;
    let mut previous = '\0';

    for ch in body.chars() {
        match ch {
            '"' if !in_string => in_string = true,
            '"' if previous != '\\' => in_string = false,
            '{' if !in_string => depth += 1,
            '}' if !in_string => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 && !(ch == '}' && !in_string) {
            own.push(ch);
        }
        previous = ch;
    }

    own
}

/// Extracts the `display-name = "..."` property value, if present.
fn parse_display_name(body: &str) -> Option<String> {
    let display_regex = Regex::new(r#"display-name\s*=\s*"([^"]*)""#).unwrap();
    display_regex
        .captures(body)
        .map(|captures| captures[1].to_string())
}

/// Extracts every well-formed geometry record from the node body.
///
/// Records missing any of their seven integers are skipped; indices count
/// only the records actually extracted, in encounter order.
fn parse_key_records(body: &str) -> Vec<KeyPosition> {
    // The list runs to the terminating semicolon. Some sources wrap the whole
    // list in one angle-bracket pair, others wrap each record separately.
    let keys_regex = Regex::new(r"keys\s*=\s*([^;]*);").unwrap();
    let Some(list) = keys_regex.captures(body) else {
        return Vec::new();
    };

    let record_regex = Regex::new(r"&key_physical_attrs((?:\s+\(?-?\d+\)?){7})").unwrap();

    let mut keys = Vec::new();
    for record in record_regex.captures_iter(&list[1]) {
        let attrs: Vec<i32> = record[1]
            .split_whitespace()
            .filter_map(|token| token.trim_matches(|c| c == '(' || c == ')').parse().ok())
            .collect();

        // Indices stay contiguous even when a matched record fails to parse.
        if let [width, height, x, y, rotation, rotation_x, rotation_y] = attrs[..] {
            keys.push(KeyPosition {
                index: keys.len(),
                width,
                height,
                x,
                y,
                rotation,
                rotation_x,
                rotation_y,
            });
        }
    }

    keys
}
