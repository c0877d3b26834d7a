//! Pretty-printing reformatter.
//!
//! Produces a new tree with indentation and newline text nodes inserted
//! around each node. Elements that contain text are left as they are, so
//! whitespace inside running text is never altered.

use tagtree_core::{Element, Node};
use tracing::trace;

use crate::builder::{assemble_root, ConstructionError, Shorthand};
use crate::options::PrettifyOptions;

/// Reformat shorthand children into an indented node sequence.
///
/// The input is collected the same way as for [`fragment`](crate::fragment).
pub fn prettify(
    input: impl Into<Shorthand>,
    options: &PrettifyOptions,
) -> Result<Vec<Node>, ConstructionError> {
    let nodes = assemble_root(input.into())?;
    Ok(prettify_nodes(&nodes, &options.indent, options.level))
}

/// Reformat a single node. A root is reformatted as its children.
pub fn prettify_node(node: &Node, options: &PrettifyOptions) -> Vec<Node> {
    match node {
        Node::Root(root) => prettify_nodes(root.children(), &options.indent, options.level),
        _ => prettify_nodes(std::slice::from_ref(node), &options.indent, options.level),
    }
}

/// Reformat a sequence of sibling nodes at the given level
pub fn prettify_nodes(nodes: &[Node], indent: &str, level: usize) -> Vec<Node> {
    trace!(count = nodes.len(), level, "prettifying nodes");
    let mut output = Vec::with_capacity(nodes.len() * 3);

    for node in nodes {
        output.push(Node::text(indent.repeat(level)));

        let pretty: Node = match node {
            Node::Element(element) if !is_inline(element) => {
                let mut children = Vec::with_capacity(element.children().len() * 3 + 2);
                children.push(Node::text("\n"));
                children.extend(prettify_nodes(element.children(), indent, level + 1));
                children.push(Node::text(indent.repeat(level)));
                Element::from_parts(element.name(), element.attributes().clone(), children).into()
            }
            Node::Element(_) => node.clone(),
            Node::Text(text) => Node::text(indent_text(text.data(), indent, level)),
            Node::Comment(comment) => Node::comment(indent_text(comment.data(), indent, level)),
            Node::DocumentType(_) | Node::Raw(_) | Node::Root(_) => node.clone(),
        };
        output.push(pretty);

        output.push(Node::text("\n"));
    }

    output
}

/// Elements without children or with any direct text child are kept as-is
fn is_inline(element: &Element) -> bool {
    element.children().is_empty() || element.children().iter().any(Node::is_text)
}

/// Indent after every newline that is not followed by another newline
fn indent_text(text: &str, indent: &str, level: usize) -> String {
    let prefix = indent.repeat(level);
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if c == '\n' && chars.peek() != Some(&'\n') {
            result.push_str(&prefix);
        }
    }

    result
}
