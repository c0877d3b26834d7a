//! Element classification and escaping tables.

/// Elements serialized as a lone opening tag
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
    // Not void in the content model but serialized as such
    "basefont", "bgsound", "frame", "keygen",
];

/// Elements whose text children are emitted without escaping
pub const TEXT_PRESERVING_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Check if a tag serializes as void. Case-sensitive.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Check if a tag preserves its text content. Case-sensitive.
pub fn is_text_preserving(tag: &str) -> bool {
    TEXT_PRESERVING_ELEMENTS.contains(&tag)
}

/// Escape an attribute value for use inside double quotes
pub fn escape_attribute(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escape character data outside of text-preserving elements
pub fn escape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '\u{a0}' => result.push_str("&nbsp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}
