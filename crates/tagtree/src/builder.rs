//! Shorthand-to-tree builder.
//!
//! [`Shorthand`] is the flexible input grammar accepted wherever children are
//! expected: strings, nodes, optional values, nested lists, attribute records
//! and class tokens.

use std::fmt;

use tagtree_core::{
    serialize_attributes, Attributes, Comment, DocumentType, Element, Node, RawFragment, Text,
};
use tracing::{debug, trace};

/// Input accepted by [`el`] and the root-level entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shorthand {
    /// Bare string, becomes a text child
    Text(String),

    /// Class token, appended to the `class` attribute with a space separator
    Class(String),

    /// Node inserted as-is
    Node(Node),

    /// Nothing; lets callers compose with `Option`
    Absent,

    /// Flattened depth-first, in order
    List(Vec<Shorthand>),

    /// Attribute record; each pair overwrites any existing value
    Attrs(Attributes),
}

/// A location in a shorthand tree: the enclosing element, the attributes it
/// had accumulated and the index of the failing child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub element: String,
    pub attributes: Attributes,
    pub index: usize,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attrs = String::new();
        serialize_attributes(&self.attributes, &mut attrs);
        write!(f, "{}{}:{}", self.element, attrs, self.index)
    }
}

/// Error raised while assembling a tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("tag must be an array, not {found}")]
    NotATag { found: String },

    #[error("element name must be a string, not {found}")]
    InvalidName { found: String },

    #[error("{marker} expects exactly one string, e.g. [\"{marker}\", \"data\"]")]
    InvalidLeaf { marker: String },

    #[error("unsupported child type to <{element}>: {kind}")]
    UnsupportedChild { element: String, kind: &'static str },

    #[error("unsupported value type for attribute {attribute} of <{element}>: {kind}")]
    UnsupportedAttributeValue {
        element: String,
        attribute: String,
        kind: &'static str,
    },

    #[error("{kind} at the root has no element to apply to")]
    RootAttributes { kind: &'static str },

    #[error("{source}\n  in {frame}")]
    Nested {
        source: Box<ConstructionError>,
        frame: Frame,
    },
}

impl ConstructionError {
    /// Wrap this error with the location of the child that raised it
    pub fn nested(self, element: &str, attributes: &Attributes, index: usize) -> Self {
        ConstructionError::Nested {
            source: Box::new(self),
            frame: Frame {
                element: element.to_string(),
                attributes: attributes.clone(),
                index,
            },
        }
    }

    /// Location frames, innermost first
    pub fn trail(&self) -> Vec<&Frame> {
        let mut frames = Vec::new();
        let mut current = self;
        while let ConstructionError::Nested { source, frame } = current {
            frames.push(frame);
            current = source;
        }
        frames.reverse();
        frames
    }

    /// The error that started it all, without location frames
    pub fn root_cause(&self) -> &ConstructionError {
        let mut current = self;
        while let ConstructionError::Nested { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Build an element from a name and shorthand children.
///
/// Use the [`el!`](crate::el!) macro to pass children positionally.
pub fn el(name: impl Into<String>, children: impl Into<Shorthand>) -> Element {
    let mut builder = ElementBuilder::new(name.into());
    trace!(element = %builder.name, "building element");
    builder.append(children.into());
    builder.finish()
}

/// Create a text node
pub fn text(data: impl Into<String>) -> Text {
    Text::new(data)
}

/// Create a comment node
pub fn comment(data: impl Into<String>) -> Comment {
    Comment::new(data)
}

/// Create a fragment of HTML inserted without escaping or validation
pub fn raw(html: impl Into<String>) -> RawFragment {
    RawFragment::new(html)
}

/// Create a document type declaration
pub fn doctype(name: impl Into<String>) -> DocumentType {
    DocumentType::new(name)
}

/// Create an attribute record
pub fn attrs<I, K, V>(pairs: I) -> Shorthand
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    Shorthand::Attrs(
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Create a class token
pub fn class(token: impl Into<String>) -> Shorthand {
    Shorthand::Class(token.into())
}

/// Accumulates the parts of one element
pub(crate) struct ElementBuilder {
    pub(crate) name: String,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Node>,
}

impl ElementBuilder {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    fn append(&mut self, item: Shorthand) {
        match item {
            Shorthand::Text(data) => self.children.push(Node::text(data)),
            Shorthand::Class(token) => self.add_class(&token),
            Shorthand::Node(node) => self.children.push(node),
            Shorthand::Absent => {}
            Shorthand::List(items) => {
                for item in items {
                    self.append(item);
                }
            }
            Shorthand::Attrs(record) => self.set_attributes(record),
        }
    }

    pub(crate) fn add_class(&mut self, token: &str) {
        match self.attributes.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(token);
            }
            None => {
                self.attributes.insert("class".to_string(), token.to_string());
            }
        }
    }

    pub(crate) fn set_attributes(&mut self, record: Attributes) {
        for (name, value) in record {
            self.attributes.insert(name, value);
        }
    }

    pub(crate) fn finish(self) -> Element {
        Element::from_parts(self.name, self.attributes, self.children)
    }
}

/// Collect top-level shorthand into the children of a root container.
///
/// Strings become text, nested roots are spliced in. Class tokens and
/// attribute records have no element to apply to and are rejected.
pub(crate) fn assemble_root(input: Shorthand) -> Result<Vec<Node>, ConstructionError> {
    let mut nodes = Vec::new();
    append_root(&mut nodes, input)?;
    trace!(count = nodes.len(), "assembled root");
    Ok(nodes)
}

fn append_root(nodes: &mut Vec<Node>, item: Shorthand) -> Result<(), ConstructionError> {
    match item {
        Shorthand::Text(data) => nodes.push(Node::text(data)),
        Shorthand::Node(Node::Root(root)) => nodes.extend(root.into_children()),
        Shorthand::Node(node) => nodes.push(node),
        Shorthand::Absent => {}
        Shorthand::List(items) => {
            for item in items {
                append_root(nodes, item)?;
            }
        }
        Shorthand::Class(_) => return Err(root_attributes("class token")),
        Shorthand::Attrs(_) => return Err(root_attributes("attribute record")),
    }
    Ok(())
}

fn root_attributes(kind: &'static str) -> ConstructionError {
    debug!(kind, "rejecting attributes at the root");
    ConstructionError::RootAttributes { kind }
}

impl From<&str> for Shorthand {
    fn from(value: &str) -> Self {
        Shorthand::Text(value.to_string())
    }
}

impl From<&String> for Shorthand {
    fn from(value: &String) -> Self {
        Shorthand::Text(value.clone())
    }
}

impl From<String> for Shorthand {
    fn from(value: String) -> Self {
        Shorthand::Text(value)
    }
}

impl From<Node> for Shorthand {
    fn from(value: Node) -> Self {
        Shorthand::Node(value)
    }
}

impl From<Element> for Shorthand {
    fn from(value: Element) -> Self {
        Shorthand::Node(value.into())
    }
}

impl From<Text> for Shorthand {
    fn from(value: Text) -> Self {
        Shorthand::Node(value.into())
    }
}

impl From<Comment> for Shorthand {
    fn from(value: Comment) -> Self {
        Shorthand::Node(value.into())
    }
}

impl From<RawFragment> for Shorthand {
    fn from(value: RawFragment) -> Self {
        Shorthand::Node(value.into())
    }
}

impl From<DocumentType> for Shorthand {
    fn from(value: DocumentType) -> Self {
        Shorthand::Node(value.into())
    }
}

impl From<()> for Shorthand {
    fn from(_: ()) -> Self {
        Shorthand::Absent
    }
}

impl<T: Into<Shorthand>> From<Option<T>> for Shorthand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Shorthand::Absent, Into::into)
    }
}

impl<T: Into<Shorthand>> From<Vec<T>> for Shorthand {
    fn from(value: Vec<T>) -> Self {
        Shorthand::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Shorthand>, const N: usize> From<[T; N]> for Shorthand {
    fn from(value: [T; N]) -> Self {
        Shorthand::List(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strings_become_text() {
        let element = el("a", ["foo", "bar"]);
        assert_eq!(element.children(), &[Node::text("foo"), Node::text("bar")]);
        assert!(element.attributes().is_empty());
    }

    #[test]
    fn test_class_tokens_accumulate() {
        let element = el("a", [class("foo"), class("bar")]);
        assert_eq!(element.attr("class"), Some("foo bar"));
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_attribute_record_overwrites_class() {
        let element = el("a", [class("foo"), attrs([("class", "bar")])]);
        assert_eq!(element.attr("class"), Some("bar"));

        let element = el("a", [attrs([("class", "bar")]), class("foo")]);
        assert_eq!(element.attr("class"), Some("bar foo"));
    }

    #[test]
    fn test_attribute_records_overwrite_in_order() {
        let element = el(
            "a",
            [
                attrs([("id", "first"), ("href", "/")]),
                attrs([("id", "second")]),
            ],
        );
        let pairs: Vec<_> = element
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, [("id", "second"), ("href", "/")]);
    }

    #[test]
    fn test_absent_children_are_ignored() {
        let missing: Option<Element> = None;
        let element = el("a", vec![Shorthand::Absent, missing.into(), ().into()]);
        assert!(element.children().is_empty());
    }

    #[test]
    fn test_lists_flatten_in_order() {
        let element = el(
            "ul",
            vec![
                Shorthand::from(el("li", "1")),
                Shorthand::from(vec![
                    Shorthand::from(el("li", "2")),
                    Shorthand::from(vec![el("li", "3")]),
                ]),
                Shorthand::from(el("li", "4")),
            ],
        );
        let texts: Vec<_> = element
            .children()
            .iter()
            .map(Node::text_content)
            .collect();
        assert_eq!(texts, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_nodes_are_inserted_as_is() {
        let element = el("p", vec![Shorthand::from(comment("c")), raw("<b>").into()]);
        assert_eq!(element.children(), &[Node::comment("c"), Node::raw("<b>")]);
    }

    #[test]
    fn test_macro_children() {
        let element = crate::el!("a", attrs([("href", "/")]), class("x"), "link", None::<Text>);
        assert_eq!(element.attr("href"), Some("/"));
        assert_eq!(element.attr("class"), Some("x"));
        assert_eq!(element.children(), &[Node::text("link")]);

        let empty = crate::el!("br");
        assert!(empty.children().is_empty());
    }

    #[test]
    fn test_assemble_root() {
        let nodes = assemble_root(Shorthand::from(vec![
            Shorthand::from("spam"),
            Shorthand::from(el("a", ())),
            Shorthand::Absent,
        ]))
        .unwrap();
        assert_eq!(nodes, vec![Node::text("spam"), el("a", ()).into()]);
    }

    #[test]
    fn test_root_splices_nested_roots() {
        let root = tagtree_core::Root::new(vec![Node::text("a"), Node::text("b")]);
        let nodes = assemble_root(Shorthand::Node(Node::Root(root))).unwrap();
        assert_eq!(nodes, vec![Node::text("a"), Node::text("b")]);
    }

    #[test]
    fn test_root_rejects_attributes() {
        let err = assemble_root(attrs([("id", "x")])).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::RootAttributes {
                kind: "attribute record"
            }
        );
        assert!(assemble_root(class("x")).is_err());
    }

    #[test]
    fn test_nested_error_trail() {
        let mut attributes = Attributes::new();
        attributes.insert("id".to_string(), "a".to_string());

        let err = ConstructionError::UnsupportedChild {
            element: "b".to_string(),
            kind: "number",
        }
        .nested("b", &Attributes::new(), 3)
        .nested("a", &attributes, 2);

        assert_eq!(
            err.to_string(),
            "unsupported child type to <b>: number\n  in b:3\n  in a id=\"a\":2"
        );
        let trail: Vec<_> = err.trail().iter().map(|f| f.element.as_str()).collect();
        assert_eq!(trail, ["b", "a"]);
        assert!(matches!(
            err.root_cause(),
            ConstructionError::UnsupportedChild { .. }
        ));
    }

    #[test]
    fn test_nested_error_chain() {
        use std::error::Error as _;

        let err = ConstructionError::InvalidName {
            found: "0".to_string(),
        }
        .nested("b", &Attributes::new(), 1)
        .nested("a", &Attributes::new(), 4);

        let mut chain = Vec::new();
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(&err);
        while let Some(error) = current {
            chain.push(error.to_string());
            current = error.source();
        }
        assert_eq!(
            chain,
            [
                "element name must be a string, not 0\n  in b:1\n  in a:4",
                "element name must be a string, not 0\n  in b:1",
                "element name must be a string, not 0",
            ]
        );
    }
}
