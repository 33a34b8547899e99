//! Attribute extraction from raw tag bodies

/// Extract an attribute's value from a raw tag body, or return an empty
/// string when the attribute is absent or malformed.
///
/// Tolerates double-quoted, single-quoted, and unquoted values
/// (`src=proto:path`). Unquoted values run to the next space or the end of
/// the tag body. A quoted value with no closing quote yields an empty
/// string.
pub fn extract_attribute(tag: &str, attribute: &str) -> String {
    let needle = format!("{}=", attribute);
    let Some(found) = tag.find(&needle) else {
        return String::new();
    };

    let value_start = found + needle.len();
    let rest = &tag[value_start..];
    let mut chars = rest.chars();

    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let inner = &rest[1..];
            match inner.find(quote) {
                Some(end) => inner[..end].to_string(),
                None => String::new(),
            }
        }
        Some(_) => match rest.find(' ') {
            Some(end) => rest[..end].to_string(),
            None => rest.to_string(),
        },
        None => String::new(),
    }
}
