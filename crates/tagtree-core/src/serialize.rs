//! HTML serialization
//!
//! Converts node trees into HTML text. This is a subset of the HTML fragment
//! serialization algorithm: void elements, text-preserving elements, comments
//! and DOCTYPE are handled, nothing else is.

use tracing::{debug, trace};

use crate::elements::{escape_attribute, escape_text, is_text_preserving, is_void};
use crate::node::{Attributes, Comment, Element, Node, Text};
use crate::{Result, SerializeError, TextPreservingViolation};

/// Serialize a node and its descendants to an HTML string.
///
/// A [`Node::Root`] serializes to the concatenation of its children.
pub fn serialize_node(node: &Node) -> Result<String> {
    trace!(kind = node.kind(), "serializing node");
    let mut output = String::with_capacity(256);

    match node {
        Node::Root(root) => serialize_children(None, root.children(), &mut output)?,
        _ => serialize_child(None, node, &mut output)?,
    }

    Ok(output)
}

/// Serialize a sequence of top-level nodes, as if they were held by a root
pub fn serialize_nodes(nodes: &[Node]) -> Result<String> {
    trace!(count = nodes.len(), "serializing nodes");
    let mut output = String::with_capacity(256);
    serialize_children(None, nodes, &mut output)?;
    Ok(output)
}

/// Serialize attributes as ` name="value"` pairs in map order
pub fn serialize_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

fn serialize_children(parent: Option<&Element>, children: &[Node], out: &mut String) -> Result<()> {
    for child in children {
        serialize_child(parent, child, out)?;
    }
    Ok(())
}

fn serialize_child(parent: Option<&Element>, node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Element(element) => serialize_element(element, out),

        Node::Text(text) => serialize_text(parent, text, out),

        Node::Comment(comment) => serialize_comment(comment, out),

        Node::Raw(raw) => {
            out.push_str(raw.data());
            Ok(())
        }

        Node::DocumentType(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(doctype.name());
            out.push('>');
            Ok(())
        }

        Node::Root(_) => {
            let location = match parent {
                Some(element) => format!("<{}>", element.name()),
                None => "another root".to_string(),
            };
            debug!(%location, "nested root container");
            Err(SerializeError::UnsupportedNode {
                description: format!("root container nested inside {location}"),
            })
        }
    }
}

fn serialize_element(element: &Element, out: &mut String) -> Result<()> {
    out.push('<');
    out.push_str(element.name());
    serialize_attributes(element.attributes(), out);
    out.push('>');

    if is_void(element.name()) {
        if !element.children().is_empty() {
            debug!(
                element = element.name(),
                ignored = element.children().len(),
                "ignoring children of void element"
            );
        }
        return Ok(());
    }

    serialize_children(Some(element), element.children(), out)?;

    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
    Ok(())
}

fn serialize_text(parent: Option<&Element>, text: &Text, out: &mut String) -> Result<()> {
    match parent {
        Some(element) if is_text_preserving(element.name()) => {
            // Checked per node: adjacent text nodes that only jointly form a
            // forbidden sequence are not caught.
            check_preserved_text(element.name(), text.data())?;
            out.push_str(text.data());
        }
        _ => out.push_str(&escape_text(text.data())),
    }
    Ok(())
}

fn check_preserved_text(element: &str, data: &str) -> Result<()> {
    let violation = if data.contains("<!--") {
        Some(TextPreservingViolation::CommentOpener)
    } else if data.contains(&format!("<{element}")) {
        Some(TextPreservingViolation::OpeningTag)
    } else if data.contains(&format!("</{element}")) {
        Some(TextPreservingViolation::ClosingTag)
    } else {
        None
    };

    match violation {
        Some(violation) => {
            debug!(element, %violation, "rejecting text in text preserving element");
            Err(SerializeError::TextPreserving {
                element: element.to_string(),
                violation,
            })
        }
        None => Ok(()),
    }
}

fn serialize_comment(comment: &Comment, out: &mut String) -> Result<()> {
    if comment.data().contains("-->") {
        debug!("rejecting comment containing terminator");
        return Err(SerializeError::CommentTerminator {
            data: comment.data().to_string(),
        });
    }

    out.push_str("<!--");
    out.push_str(comment.data());
    out.push_str("-->");
    Ok(())
}
