//! C-style comment stripping for device-tree keyboard sources.
//!
//! ZMK layout and keymap files use `//` line comments and `/* ... */` block
//! comments. Stripping happens before any block or record extraction so the
//! downstream parsers only ever see comment-free text.

/// Removes line and block comments from device-tree source text.
///
/// Scans line by line, carrying a single piece of state across line
/// boundaries: whether the scanner is currently inside a block comment.
/// Block comments may span any number of lines; the first `*/` encountered
/// always closes the open block (nested blocks are not tracked, matching the
/// devicetree compiler). All non-comment bytes are preserved verbatim and
/// lines are rejoined with `\n`, so text without comment markers round-trips
/// unchanged.
///
/// # Examples
///
/// ```
/// use zmklens::parser::strip_comments;
///
/// let stripped = strip_comments("keys = <1 2>; // trailing note");
/// assert_eq!(stripped, "keys = <1 2>; ");
/// ```
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let mut in_block = false;
    let mut out_lines = Vec::new();

    for line in text.split('\n') {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        loop {
            if in_block {
                match rest.find("*/") {
                    Some(end) => {
                        rest = &rest[end + 2..];
                        in_block = false;
                    }
                    None => break,
                }
            } else {
                match (rest.find("//"), rest.find("/*")) {
                    (None, None) => {
                        out.push_str(rest);
                        break;
                    }
                    // Line comment first: the rest of the line is discarded.
                    (Some(l), None) => {
                        out.push_str(&rest[..l]);
                        break;
                    }
                    (None, Some(b)) => {
                        out.push_str(&rest[..b]);
                        rest = &rest[b + 2..];
                        in_block = true;
                    }
                    (Some(l), Some(b)) => {
                        if l < b {
                            out.push_str(&rest[..l]);
                            break;
                        }
                        out.push_str(&rest[..b]);
                        rest = &rest[b + 2..];
                        in_block = true;
                    }
                }
            }
        }

        out_lines.push(out);
    }

    out_lines.join("\n")
}
