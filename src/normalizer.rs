//! Whitespace normalization applied to the raw HTML before scanning
//!
//! The scanner operates on a single line of text: tabs become spaces,
//! carriage returns and newlines are dropped entirely, and any remaining run
//! of two or more whitespace characters collapses to one space. Significant
//! single spaces between tags survive, which is what keeps
//! `<b>Bold</b> <strong>Strong</strong>` from fusing into one word.

use regex::Regex;
use std::sync::OnceLock;

/// Collapse runs of two or more whitespace characters to a single space
fn whitespace_run_regex() -> Option<&'static Regex> {
    static WHITESPACE_RUN: OnceLock<Option<Regex>> = OnceLock::new();
    WHITESPACE_RUN
        .get_or_init(|| Regex::new(r"\s{2,}").ok())
        .as_ref()
}

/// Normalize raw HTML input for the single-pass scanner.
///
/// - Tab characters are replaced by a single space
/// - Carriage-return and newline characters are removed
/// - Runs of two or more whitespace characters collapse to one space
/// - Leading and trailing whitespace is trimmed
///
/// Pure function, no error conditions.
pub fn normalize_html(html: &str) -> String {
    let mut flattened = String::with_capacity(html.len());
    for c in html.chars() {
        match c {
            '\t' => flattened.push(' '),
            '\n' | '\r' => {}
            _ => flattened.push(c),
        }
    }

    match whitespace_run_regex() {
        Some(re) => re.replace_all(&flattened, " ").trim().to_string(),
        // Regex compilation cannot fail for a literal pattern; fall back to
        // the flattened text so the scanner still sees valid input
        None => flattened.trim().to_string(),
    }
}
