//! Configuration options for pretty-printing

/// Options for [`prettify`](crate::prettify)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettifyOptions {
    /// String repeated once per nesting level
    pub indent: String,

    /// Nesting level of the outermost nodes
    pub level: usize,
}

impl Default for PrettifyOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            level: 0,
        }
    }
}

impl PrettifyOptions {
    /// Create default options (tab indentation, starting at level 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation string
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the starting nesting level
    pub fn level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }
}
