//! Tag classification and the fixed allow-list/ignore-list policy
//!
//! A tag token is the substring between `<` and `>`, exclusive, already
//! trimmed. Classification is purely lexical: a trailing `/` marks a
//! self-closing tag, a leading `/` marks a closing tag, and the name is the
//! first whitespace-delimited token lower-cased. Anything more elaborate
//! (attribute parsing) is left to the attribute extractor.

/// Tag names the engine knows how to render into Markdown.
///
/// Names on this list but without an emission rule (currently `div`) still
/// fall through to the unrecognized-tag diagnostic at dispatch time.
pub const ALLOWED_TAGS: &[&str] = &[
    "div", "iframe", "input", "label", "button", "span", "i", "em", "br", "hr", "form", "tbody",
    "table", "thead", "tr", "th", "td", "ul", "ol", "li", "a", "img", "h1", "h2", "h3", "h4", "h5",
    "h6", "p", "b", "strong", "blockquote", "code",
];

/// Head-like containers whose entire content is dropped from the output
pub const IGNORED_TAGS: &[&str] = &["head", "title", "style", "script"];

/// A classified tag token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    /// Lower-cased tag name with `/` markers stripped
    pub name: String,
    /// True for `</name ...>` tokens
    pub is_closing: bool,
    /// True when the raw token ends with `/`
    pub is_self_closing: bool,
}

impl TagToken {
    /// Classify the trimmed text between `<` and `>`.
    ///
    /// Self-closing detection looks at the raw token's trailing `/`; the
    /// closing-tag check only applies when the token is not self-closing,
    /// matching the scan's dispatch rules.
    pub fn classify(raw: &str) -> Self {
        let is_self_closing = raw.ends_with('/');
        let mut name = raw
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let mut is_closing = false;
        if is_self_closing {
            name = name.trim_end_matches('/').to_string();
        } else if let Some(stripped) = name.strip_prefix('/') {
            is_closing = true;
            name = stripped.to_string();
        }

        Self {
            name,
            is_closing,
            is_self_closing,
        }
    }

    /// True when the name is on the Markdown allow-list
    pub fn is_allowed(&self) -> bool {
        ALLOWED_TAGS.contains(&self.name.as_str())
    }

    /// True when the name opens or closes an ignored-content region
    pub fn is_ignored_container(&self) -> bool {
        IGNORED_TAGS.contains(&self.name.as_str())
    }
}
