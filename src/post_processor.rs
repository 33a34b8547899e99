//! Post-processing pass over the raw scan output
//!
//! The scanner encodes nested-list indentation as runs of `~` markers so
//! that the final pass can tell deliberate indentation apart from spacing
//! artifacts. This pass rewrites those runs into visible spaces, strips the
//! leading whitespace the scan left on other lines, and drops the one
//! trailing line break the split/rejoin would otherwise duplicate.

use regex::Regex;
use std::sync::OnceLock;

use crate::LINE_BREAK;

/// Leading run of indent markers at the start of a line
fn indent_marker_regex() -> Option<&'static Regex> {
    static INDENT_MARKERS: OnceLock<Option<Regex>> = OnceLock::new();
    INDENT_MARKERS.get_or_init(|| Regex::new(r"^~+").ok()).as_ref()
}

/// Repair indentation and the trailing line break of the scan buffer.
///
/// Lines beginning (after leading-space trim) with the internal `~` indent
/// marker have the marker run replaced by an equal number of spaces; all
/// other lines lose their leading whitespace. A buffer without any line
/// break is returned unmodified. If the buffer ended with a line break,
/// exactly one trailing break is removed from the reassembled result.
pub fn post_process(buffer: &str) -> String {
    if !buffer.contains(LINE_BREAK) {
        return buffer.to_string();
    }
    let ends_with_line_break = buffer.ends_with(LINE_BREAK) || buffer.ends_with('\n');

    let mut result = String::with_capacity(buffer.len());
    for line in buffer.split(LINE_BREAK) {
        let trimmed = line.trim_start();
        if trimmed.starts_with('~') {
            match indent_marker_regex() {
                Some(re) => {
                    let spaced =
                        re.replace(trimmed, |caps: &regex::Captures| " ".repeat(caps[0].len()));
                    result.push_str(&spaced);
                }
                None => result.push_str(trimmed),
            }
        } else {
            result.push_str(trimmed);
        }
        result.push_str(LINE_BREAK);
    }

    if ends_with_line_break {
        result.truncate(result.len() - LINE_BREAK.len());
    }
    result
}
