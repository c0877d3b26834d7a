//! HTML node model
//!
//! This module defines the node kinds that make up a tree. Trees are values:
//! they are assembled once by a builder and then serialized or reformatted
//! into new trees. No node exposes a way to mutate it after construction.

use indexmap::IndexMap;

/// Ordered attribute map. Insertion order is the output order.
pub type Attributes = IndexMap<String, String>;

/// A node in an HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `<!DOCTYPE name>` marker
    DocumentType(DocumentType),

    /// Character content, escaped or raw depending on the parent element
    Text(Text),

    /// `<!--data-->`
    Comment(Comment),

    /// Pre-trusted markup emitted verbatim
    Raw(RawFragment),

    /// Tag with attributes and children
    Element(Element),

    /// Unnamed top-level container, never nested inside another node
    Root(Root),
}

/// Document type declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    name: String,
}

impl DocumentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    data: String,
}

impl Text {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Comment node. The data is checked for `-->` only when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    data: String,
}

impl Comment {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Unescaped, unvalidated HTML. The caller is responsible for well-formedness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFragment {
    data: String,
}

impl RawFragment {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// An element with a tag name, ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Attributes,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_parts(name, Attributes::new(), Vec::new())
    }

    /// Create an element from already assembled parts
    pub fn from_parts(name: impl Into<String>, attributes: Attributes, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Tag name, as given (no case folding)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Top-level container for fragments and documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Node> {
        self.children
    }
}

impl Node {
    /// Create a text node
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text(Text::new(data))
    }

    /// Create a comment node
    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment(Comment::new(data))
    }

    /// Create a raw HTML fragment
    pub fn raw(data: impl Into<String>) -> Self {
        Node::Raw(RawFragment::new(data))
    }

    /// Create a document type declaration
    pub fn doctype(name: impl Into<String>) -> Self {
        Node::DocumentType(DocumentType::new(name))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Short description used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::DocumentType(_) => "document type",
            Node::Text(_) => "text",
            Node::Comment(_) => "comment",
            Node::Raw(_) => "raw fragment",
            Node::Element(_) => "element",
            Node::Root(_) => "root",
        }
    }

    /// Direct children; empty for leaf kinds
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children(),
            Node::Root(root) => root.children(),
            Node::DocumentType(_) | Node::Text(_) | Node::Comment(_) | Node::Raw(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.data().to_string(),
            _ => self
                .children()
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

impl From<DocumentType> for Node {
    fn from(value: DocumentType) -> Self {
        Node::DocumentType(value)
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

impl From<Comment> for Node {
    fn from(value: Comment) -> Self {
        Node::Comment(value)
    }
}

impl From<RawFragment> for Node {
    fn from(value: RawFragment) -> Self {
        Node::Raw(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<Root> for Node {
    fn from(value: Root) -> Self {
        Node::Root(value)
    }
}
