//! tagtree-core - HTML node model and serialization
//!
//! This crate provides the node tree and the serializer for HTML.
//! It is used by `tagtree`, which builds trees from shorthand and
//! reformats them.
//!
//! # Architecture
//!
//! ```text
//! Shorthand ──builder──▶ ┌───────────┐ ──serialize──▶ HTML String
//!                        │ Node tree │
//! JSON tag arrays ──────▶│           │ ◀──prettify──┐
//!                        └───────────┘ ─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use tagtree_core::{serialize_node, Attributes, Element, Node};
//!
//! let title = Element::from_parts("h1", Attributes::new(), vec![Node::text("Fish & Chips")]);
//!
//! let html = serialize_node(&Node::Element(title)).unwrap();
//! assert_eq!(html, "<h1>Fish &amp; Chips</h1>");
//! ```

mod elements;
mod node;
mod serialize;

use std::fmt;

pub use elements::{
    escape_attribute, escape_text, is_text_preserving, is_void, TEXT_PRESERVING_ELEMENTS,
    VOID_ELEMENTS,
};
pub use node::{Attributes, Comment, DocumentType, Element, Node, RawFragment, Root, Text};
pub use serialize::{serialize_attributes, serialize_node, serialize_nodes};

/// Error type for serialization
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    #[error("unsupported node: {description}")]
    UnsupportedNode { description: String },

    #[error("comment containing -->")]
    CommentTerminator { data: String },

    #[error("{violation} in text preserving element <{element}>")]
    TextPreserving {
        element: String,
        violation: TextPreservingViolation,
    },
}

/// Forbidden sequences inside a text-preserving element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPreservingViolation {
    /// `<!--`
    CommentOpener,
    /// `<` followed by the element's own name
    OpeningTag,
    /// `</` followed by the element's own name
    ClosingTag,
}

impl fmt::Display for TextPreservingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextPreservingViolation::CommentOpener => f.write_str("<!--"),
            TextPreservingViolation::OpeningTag => f.write_str("opening tag"),
            TextPreservingViolation::ClosingTag => f.write_str("closing tag"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SerializeError>;
