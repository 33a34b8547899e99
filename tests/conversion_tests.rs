//! End-to-end conversion tests
//!
//! This suite pins the documented behaviors of the conversion entry point:
//! exact output for the simple cases, the diagnostic policy for malformed
//! and unrecognized markup, and the purity and totality properties checked
//! with proptest.

use html_markdown_converter::{DiagnosticKind, MarkdownConverter, normalize_html};
use proptest::prelude::*;

fn convert(html: &str) -> html_markdown_converter::ConversionResult {
    MarkdownConverter::new().convert(html)
}

#[test]
fn plain_text_passes_through_unchanged() {
    let result = convert("PlainText");
    assert_eq!(result.markdown, "PlainText");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn empty_and_whitespace_input_yield_empty_result() {
    for input in ["", "   ", "\t\r\n", " \n "] {
        let result = convert(input);
        assert_eq!(result.markdown, "");
        assert!(result.diagnostics.is_empty());
    }
}

#[test]
fn simple_heading() {
    let result = convert("<h1>Hello, World!</h1>");
    assert_eq!(result.markdown, "# Hello, World!\r\n\r\n");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn paragraph_with_inline_formatting() {
    let result = convert("<p>This is a <strong>test</strong> of the <em>conversion</em> service.</p>");
    assert_eq!(
        result.markdown,
        "This is a **test** of the _conversion_ service.\r\n\r\n"
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn bold_and_strong_side_by_side() {
    let result = convert("<b>Bold</b> <strong>Strong</strong>");
    assert_eq!(result.markdown, "**Bold** **Strong**");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn unordered_list_shape() {
    let result = convert("<ul><li>A</li><li>B</li></ul>");
    // Leading break, one bullet line per item, trailing blank line
    assert_eq!(result.markdown, "\r\n * A\r\n * B\r\n\r\n");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn script_region_is_dropped_without_diagnostics() {
    let result = convert("<script>anything</script>Body");
    assert_eq!(result.markdown, "Body");
    assert!(result.diagnostics.is_empty());

    // Content is irrelevant, even when it looks like markup
    let result = convert("<script>var s = '<p>x</p>';</script>Body");
    assert_eq!(result.markdown, "Body");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn head_region_is_dropped() {
    let result = convert("<head><title>Ignored</title></head><h1>Kept</h1>");
    assert_eq!(result.markdown, "# Kept\r\n\r\n");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn malformed_tag_halts_with_message() {
    let result = convert("<h1 X");
    assert_eq!(result.markdown, "");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::MalformedTag);
    assert_eq!(result.diagnostics[0].message, "Malformed HTML tag detected.");
}

#[test]
fn malformed_tag_keeps_output_emitted_so_far() {
    let result = convert("<h1>Kept</h1><p X");
    assert_eq!(result.markdown, "# Kept\r\n\r\n");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::MalformedTag);
}

#[test]
fn unrecognized_tag_content_flows_through() {
    // Both the opening and the closing occurrence diagnose; the opening one
    // is the required signal
    let result = convert("<xyz>content</xyz>");
    assert_eq!(result.markdown, "content");
    assert!(!result.diagnostics.is_empty());
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::UnrecognizedTag);
    assert_eq!(result.diagnostics[0].message, "Unrecognized tag: xyz");
    assert_eq!(result.diagnostics.len(), 2);
}

#[test]
fn internal_fault_discards_partial_output() {
    // Anchor capture with no subsequent tag faults; the heading emitted
    // before it is discarded, unlike the malformed-tag case
    let result = convert("<h1>Kept</h1><a href='u'>dangling");
    assert_eq!(result.markdown, "");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::InternalFault);
}

#[test]
fn link_inside_blockquote_with_code() {
    let result = convert(
        "<blockquote>This is a blockquote with \
         <a href='https://example.com'>a link</a> and <code>inline code</code>.</blockquote>",
    );
    assert!(result.markdown.contains("> This is a blockquote with"));
    assert!(result.markdown.contains("[a link](https://example.com)"));
    assert!(result.markdown.contains("`inline code`"));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn showcase_document_converts_all_sections() {
    let html = r#"<h1>Document Title</h1>
<p>This is a paragraph with <a href='https://example.com'>a link</a>, some <b>bold</b> text, and some <i>italic</i> text.</p>

<ul>
  <li>First list item</li>
  <li>Second list item</li>
</ul>

<ol>
  <li>First ordered item</li>
  <li>Second ordered item</li>
</ol>

<form>
  <input type='text' placeholder='Enter text' />
  <button>Submit</button>
</form>"#;

    let result = convert(html);
    assert!(result.markdown.contains("# Document Title"));
    assert!(result.markdown.contains("[a link](https://example.com)"));
    assert!(result.markdown.contains("**bold**"));
    assert!(result.markdown.contains("_italic_"));
    assert!(result.markdown.contains("* First list item"));
    assert!(result.markdown.contains("1. First ordered item"));
    assert!(result.markdown.contains("> Input (Type: text)"));
    assert!(result.markdown.contains("> **Button**: Submit"));
    assert!(result.markdown.contains("> **Form End**"));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn conversion_is_deterministic() {
    let html = "<h1>T</h1><ul><li><b>x</b></li></ul><table><tr><th>h</th></tr></table>";
    let first = convert(html);
    let second = convert(html);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_convert_never_panics_and_is_pure(html in any::<String>()) {
        let first = convert(&html);
        let second = convert(&html);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_tagless_text_round_trips_modulo_normalization(text in "[^<]*") {
        let result = convert(&text);
        prop_assert!(result.diagnostics.is_empty());
        prop_assert_eq!(result.markdown, normalize_html(&text));
    }
}
