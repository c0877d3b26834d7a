//! Property-based tests using proptest.
//!
//! These tests check the escaping tables and the void-element leniency on
//! arbitrary input.

use proptest::prelude::*;
use tagtree::{attrs, comment, el, escape_attribute, escape_text, fragment, text, VOID_ELEMENTS};

proptest! {
    /// Text without characters that need escaping passes through unchanged.
    #[test]
    fn safe_text_is_unchanged(s in "[A-Za-z0-9 .,!?;:'()/_-]{0,100}") {
        let html = fragment(el!("a", s.as_str())).unwrap();
        prop_assert_eq!(html, format!("<a>{s}</a>"));
    }

    /// Escaped text never contains raw markup characters.
    #[test]
    fn escaped_text_has_no_markup(s in "\\PC{0,200}") {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('\u{a0}'), "escaped output contains U+00A0");
    }

    /// Escaped attribute values never terminate the quoted value.
    #[test]
    fn escaped_attribute_has_no_quotes(s in "\\PC{0,200}") {
        let escaped = escape_attribute(&s);
        prop_assert!(!escaped.contains('"'));

        let html = fragment(el!("a", attrs([("title", s.as_str())]))).unwrap();
        prop_assert_eq!(html, format!("<a title=\"{escaped}\"></a>"));
    }

    /// Every `&` in the output starts an entity produced by escaping.
    #[test]
    fn ampersands_are_always_escaped(s in "[&<>a\u{a0}]{0,50}") {
        let escaped = escape_text(&s);
        let entities = escaped.matches('&').count();
        let expected = s.chars().filter(|c| matches!(c, '&' | '<' | '>' | '\u{a0}')).count();
        prop_assert_eq!(entities, expected);
    }

    /// Children of void elements never reach the output.
    #[test]
    fn void_elements_ignore_children(
        index in 0..VOID_ELEMENTS.len(),
        body in "\\PC{0,50}",
    ) {
        let name = VOID_ELEMENTS[index];
        let html = fragment(el!(name, body.as_str(), el!("span", text(body.as_str())))).unwrap();
        prop_assert_eq!(html, format!("<{name}>"));
    }

    /// Comments serialize whenever they do not contain the terminator.
    #[test]
    fn comments_without_terminator(data in "[a-z >-]{0,40}") {
        let result = fragment(comment(data.as_str()));
        if data.contains("-->") {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.unwrap(), format!("<!--{data}-->"));
        }
    }
}
