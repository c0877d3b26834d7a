//! # tagtree
//!
//! Build HTML trees from a compact shorthand and serialize them to escaped HTML.
//!
//! ## Design
//!
//! A tree is a value: it is assembled once by the builder, optionally run
//! through the pretty-printer, and serialized once. There is no parser and no
//! mutation API.
//!
//! - **Typed shorthand**: strings, nodes, `Option`s, lists, attribute records
//!   and class tokens all convert into [`Shorthand`]
//! - **Safe by default**: text and attribute values are escaped, comments and
//!   script-like elements are validated
//! - **Tag arrays**: trees can also be built from JSON (`json` feature)
//!
//! ## Example
//!
//! ```rust
//! use tagtree::{attrs, class, document, el};
//!
//! let page = el!("html",
//!     el!("head", el!("title", "Test")),
//!     el!("body",
//!         el!("h1", attrs([("id", "top")]), class("hero"), "Hello & welcome"),
//!         el!("br"),
//!     ),
//! );
//!
//! assert_eq!(
//!     document(page).unwrap(),
//!     "<!DOCTYPE html><html><head><title>Test</title></head>\
//!      <body><h1 id=\"top\" class=\"hero\">Hello &amp; welcome</h1><br></body></html>"
//! );
//! ```
//!
//! ## Example (pretty-printing)
//!
//! ```rust
//! use tagtree::{el, fragment, prettify, PrettifyOptions};
//!
//! let list = el!("ul", el!("li", "one"), el!("li", "two"));
//! let pretty = prettify(list, &PrettifyOptions::default()).unwrap();
//!
//! assert_eq!(fragment(pretty).unwrap(), "<ul>\n\t<li>one</li>\n\t<li>two</li>\n</ul>\n");
//! ```

mod builder;
#[cfg(feature = "json")]
pub mod json;
mod options;
mod prettify;

pub use builder::{
    attrs, class, comment, doctype, el, raw, text, ConstructionError, Frame, Shorthand,
};
#[cfg(feature = "json")]
pub use json::from_json;
pub use options::PrettifyOptions;
pub use prettify::{prettify, prettify_node, prettify_nodes};
pub use tagtree_core::{
    escape_attribute, escape_text, is_text_preserving, is_void, serialize_node, serialize_nodes,
    Attributes, Comment, DocumentType, Element, Node, RawFragment, Root, SerializeError, Text,
    TextPreservingViolation, TEXT_PRESERVING_ELEMENTS, VOID_ELEMENTS,
};

/// Error type for tagtree operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Serialize shorthand roots as an HTML fragment.
///
/// Top-level strings become text. Class tokens and attribute records at the
/// top level are rejected with [`ConstructionError::RootAttributes`] since
/// there is no element to hold them. They are never dropped silently, so a
/// misplaced `attrs(..)` or `class(..)` fails the whole call.
pub fn fragment(roots: impl Into<Shorthand>) -> Result<String> {
    let nodes = builder::assemble_root(roots.into())?;
    Ok(serialize_nodes(&nodes)?)
}

/// Serialize shorthand roots as an HTML document, prefixed with `<!DOCTYPE html>`
pub fn document(roots: impl Into<Shorthand>) -> Result<String> {
    let mut nodes = vec![Node::doctype("html")];
    nodes.extend(builder::assemble_root(roots.into())?);
    Ok(serialize_nodes(&nodes)?)
}

/// Build an [`Element`] with positional shorthand children.
///
/// ```rust
/// use tagtree::{attrs, el, fragment};
///
/// let link = el!("a", attrs([("href", "/")]), "Home");
/// assert_eq!(fragment(link).unwrap(), "<a href=\"/\">Home</a>");
/// ```
#[macro_export]
macro_rules! el {
    ($name:expr $(, $child:expr)* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::Shorthand> =
            ::std::vec![$($crate::Shorthand::from($child)),*];
        $crate::el($name, children)
    }};
}

/// Serialize positional shorthand roots as a fragment. See [`fragment()`].
#[macro_export]
macro_rules! fragment {
    ($($root:expr),* $(,)?) => {{
        let roots: ::std::vec::Vec<$crate::Shorthand> =
            ::std::vec![$($crate::Shorthand::from($root)),*];
        $crate::fragment(roots)
    }};
}

/// Serialize positional shorthand roots as a document. See [`document()`].
#[macro_export]
macro_rules! document {
    ($($root:expr),* $(,)?) => {{
        let roots: ::std::vec::Vec<$crate::Shorthand> =
            ::std::vec![$($crate::Shorthand::from($root)),*];
        $crate::document(roots)
    }};
}
