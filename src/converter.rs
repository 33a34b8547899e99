//! Conversion engine - single-pass scanner emitting Markdown
//!
//! The engine walks the normalized HTML once with a byte cursor. Literal
//! characters stream straight into the output buffer; on `<` the tag
//! classifier resolves the token, ignore-list and allow-list policy is
//! applied, and the matching emission rule runs against the shared
//! [`ParseState`]. A handful of tags (`a`, `button`) look ahead to the next
//! `<` to pull single-level inner text and advance the cursor past it.
//!
//! The scan is deliberately not an HTML parser: no tree is built and no
//! tag-soup recovery is attempted. The cursor strictly increases per
//! iteration, so the scan terminates for every input. An unterminated tag
//! halts the scan with a diagnostic and keeps the partial output; internal
//! faults (anchor capture past end of input, unmatched structural closes)
//! discard the output and surface as a single fault diagnostic.

use log::debug;

use crate::LINE_BREAK;
use crate::attributes::extract_attribute;
use crate::diagnostics::{ConversionFault, ConversionResult, Diagnostic};
use crate::normalizer::normalize_html;
use crate::post_processor::post_process;
use crate::state::{ListKind, ParseState};
use crate::tag_classifier::TagToken;

/// Stateless HTML to Markdown converter.
///
/// All scan state is allocated per call, so one instance may be shared
/// freely across threads and invocations, and converting the same input
/// twice yields byte-identical results.
///
/// Web callers hold to the documented boundary contract around this type:
/// accept a JSON body carrying the HTML string, reject empty input with a
/// client error before calling in, enforce request-size and request-rate
/// ceilings externally, and report faults generically. `convert` itself
/// never panics and never returns an error; every failure mode is a
/// diagnostic in the result.
#[derive(Debug, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert an HTML fragment or document to Markdown.
    ///
    /// Empty or all-whitespace input yields an empty result with no
    /// diagnostics. A malformed tag halts the scan and returns the partial
    /// output together with a malformed-tag diagnostic. An internal fault
    /// discards the output entirely and returns the fault message as the
    /// final diagnostic.
    pub fn convert(&self, html: &str) -> ConversionResult {
        if html.trim().is_empty() {
            return ConversionResult::default();
        }

        let normalized = normalize_html(html);
        let mut diagnostics = Vec::new();
        match scan(&normalized, &mut diagnostics) {
            Ok(buffer) => ConversionResult {
                markdown: post_process(&buffer),
                diagnostics,
            },
            Err(fault) => {
                debug!("scan aborted, output discarded: {}", fault);
                diagnostics.push(Diagnostic::internal_fault(&fault));
                ConversionResult {
                    markdown: String::new(),
                    diagnostics,
                }
            }
        }
    }
}

/// Find `needle` at or after `from`, returning its absolute byte index
fn find_from(html: &str, from: usize, needle: char) -> Option<usize> {
    html[from..].find(needle).map(|rel| from + rel)
}

/// Read the inner text between a tag's `>` and the next `<`.
///
/// `end_tag` is the byte index of the tag's closing `>`. Returns the
/// trimmed text and the index of the `<` that ended it, or `None` when no
/// further `<` exists. Single-level only: nested markup inside the tag is
/// not descended into.
fn capture_inner_text(html: &str, end_tag: usize) -> Option<(&str, usize)> {
    let start = end_tag + 1;
    let lt = find_from(html, start, '<')?;
    Some((html[start..lt].trim(), lt))
}

/// One pass over the normalized input, returning the raw buffer handed to
/// the post-processor, or the fault that aborted the scan
fn scan(html: &str, diagnostics: &mut Vec<Diagnostic>) -> Result<String, ConversionFault> {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut state = ParseState::new();
    let mut position = 0usize;

    while position < bytes.len() {
        if bytes[position] != b'<' {
            // Literal character; suppressed only inside ignored regions
            if let Some(ch) = html[position..].chars().next() {
                if !state.ignore_content {
                    out.push(ch);
                }
                position += ch.len_utf8();
            } else {
                break;
            }
            continue;
        }

        let Some(end_tag) = find_from(html, position, '>') else {
            diagnostics.push(Diagnostic::malformed_tag());
            break;
        };
        let raw = html[position + 1..end_tag].trim();
        let tag = TagToken::classify(raw);

        // Ignored-container tracking runs before any other policy: the
        // close tag of an ignored container must be seen even while
        // suppressing, and the open tag itself produces no output
        if !tag.is_closing && tag.is_ignored_container() {
            state.ignore_content = true;
        }
        if tag.is_closing && tag.is_ignored_container() {
            state.ignore_content = false;
            position = end_tag + 1;
            continue;
        }
        if state.ignore_content {
            position = end_tag + 1;
            continue;
        }

        // Unrecognized opening tags are skipped with a diagnostic; their
        // text content still flows through on later iterations. Closing and
        // self-closing tokens fall through to dispatch, where unhandled
        // names diagnose via the default arm.
        if !tag.is_allowed() && !tag.is_self_closing && !tag.is_closing {
            diagnostics.push(Diagnostic::unrecognized_tag(&tag.name));
            position = end_tag + 1;
            continue;
        }

        let moved = process_tag(html, raw, &tag, end_tag, &mut state, &mut out, diagnostics)?;

        // Advance past the tag; lookahead may already have moved further
        position = match moved {
            Some(cursor) => cursor.max(end_tag + 1),
            None => end_tag + 1,
        };
    }

    Ok(out)
}

/// Apply one tag's emission rule. Returns a cursor override when the rule
/// consumed inner text via lookahead.
fn process_tag(
    html: &str,
    raw: &str,
    tag: &TagToken,
    end_tag: usize,
    state: &mut ParseState,
    out: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<usize>, ConversionFault> {
    let mut cursor_override = None;

    match tag.name.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            if tag.is_closing {
                out.push_str(LINE_BREAK);
                out.push_str(LINE_BREAK);
            } else {
                let level = usize::from(tag.name.as_bytes()[1] - b'0');
                out.push_str(&"#".repeat(level));
                out.push(' ');
            }
        }

        "p" => {
            if tag.is_closing {
                out.push_str(LINE_BREAK);
                out.push_str(LINE_BREAK);
            }
        }

        "ul" | "ol" => {
            if tag.is_closing {
                state.close_list()?;
                out.push_str(LINE_BREAK);
            } else {
                let kind = if tag.name == "ul" {
                    ListKind::Unordered
                } else {
                    ListKind::Ordered
                };
                state.open_list(kind);
            }
        }

        "li" => {
            if tag.is_closing {
                out.push_str(LINE_BREAK);
            } else {
                if state.first_list_item {
                    out.push_str(LINE_BREAK);
                    state.first_list_item = false;
                }
                out.push_str(&"~".repeat(state.list_indent_level));
                // Nested levels carry one extra space ahead of the marker
                if state.list_indent_level > 1 {
                    out.push(' ');
                }
                out.push_str(match state.current_list_kind() {
                    ListKind::Unordered => "* ",
                    ListKind::Ordered => "1. ",
                });
            }
        }

        "blockquote" => {
            if tag.is_closing {
                out.push_str(LINE_BREAK);
                if state.blockquote_depth > 1 {
                    out.push_str("> ");
                }
                state.blockquote_depth -= 1;
            } else {
                state.blockquote_depth += 1;
                let depth = state.blockquote_repeat()?;
                out.push_str(LINE_BREAK);
                out.push_str(&">".repeat(depth));
                out.push(' ');
            }
        }

        "code" => out.push('`'),

        "a" => {
            if !tag.is_closing {
                let href = extract_attribute(raw, "href");
                let Some((text, next_lt)) = capture_inner_text(html, end_tag) else {
                    return Err(ConversionFault::AnchorCapture);
                };
                out.push_str(&format!("[{}]({})", text, href));
                cursor_override = Some(next_lt);
            }
        }

        "b" | "strong" => out.push_str("**"),

        "i" | "em" => out.push('_'),

        "img" => {
            let src = extract_attribute(raw, "src");
            let alt = extract_attribute(raw, "alt");
            out.push_str(&format!("![{}]({})", alt, src));
        }

        "br" => out.push_str(LINE_BREAK),

        "hr" => {
            out.push_str(LINE_BREAK);
            out.push_str("---");
            out.push_str(LINE_BREAK);
        }

        "table" | "tr" | "th" | "td" | "thead" | "tbody" => {
            state.process_table_tag(&tag.name, tag.is_closing, out);
        }

        "form" => {
            if tag.is_closing {
                out.push_str("> **Form End**");
                out.push_str(LINE_BREAK);
                out.push_str(LINE_BREAK);
            }
        }

        "input" => {
            let input_type = extract_attribute(raw, "type");
            out.push_str(&format!("> Input (Type: {})", input_type));
            out.push_str(LINE_BREAK);
        }

        "button" => {
            if !tag.is_closing {
                let (text, next_lt) = match capture_inner_text(html, end_tag) {
                    Some((text, lt)) => (text, Some(lt)),
                    None => ("", None),
                };
                out.push_str(&format!("> **Button**: {}", text));
                out.push_str(LINE_BREAK);
                cursor_override = next_lt;
            }
        }

        // Content passes through unformatted
        "span" | "label" => {}

        "iframe" => {
            let src = extract_attribute(raw, "src");
            out.push_str(&format!("> **Embedded Content**: [iframe link]({})", src));
            out.push_str(LINE_BREAK);
        }

        other => diagnostics.push(Diagnostic::unrecognized_tag(other)),
    }

    Ok(cursor_override)
}
