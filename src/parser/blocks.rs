//! Brace-matched block extraction.
//!
//! Device-tree nodes nest freely, so the parsers locate a block header with a
//! pattern and then hand the opening brace to [`block_body`], which tracks
//! nesting depth explicitly instead of trusting a greedy match to stop at the
//! right `}`.

/// Returns the body of the brace-delimited block whose opening `{` sits at
/// byte offset `open`, together with the offset just past the matching `}`.
///
/// Child blocks are kept inside the returned body and double-quoted string
/// literals are skipped, so a brace inside a property value cannot unbalance
/// the scan. Returns `None` when `open` does not point at `{` or the block
/// never closes.
pub(crate) fn block_body(text: &str, open: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;

    for (i, &byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'"' if !in_string => in_string = true,
            b'"' if bytes.get(i.wrapping_sub(1)) != Some(&b'\\') => in_string = false,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[open + 1..i], i + 1));
                }
            }
            _ => {}
        }
    }

    None
}
