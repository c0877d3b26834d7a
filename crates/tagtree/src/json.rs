//! JSON tag-array support.
//!
//! Builds trees from the tag-array calling convention, where an element is an
//! array whose first item is the tag name:
//!
//! ```json
//! ["a", {"href": "/"}, "nav-link", ["#text", "Home"]]
//! ```
//!
//! Following items are processed left to right. Strings are class tokens,
//! objects are attribute records, `null` is skipped, arrays starting with a
//! string are nested elements and other arrays are flattened in place.
//! `["#text", data]`, `["#comment", data]`, `["#raw", html]` and
//! `["!DOCTYPE", name]` create leaf nodes.

use serde_json::Value;
use tagtree_core::Node;
use tracing::{debug, trace};

use crate::builder::{ConstructionError, ElementBuilder};

/// Build a node from a JSON tag array.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tagtree::{fragment, from_json};
///
/// let node = from_json(&json!(["p", "lead", {"id": "intro"}, ["#text", "Hi"]])).unwrap();
/// assert_eq!(
///     fragment(node).unwrap(),
///     r#"<p class="lead" id="intro">Hi</p>"#
/// );
/// ```
pub fn from_json(value: &Value) -> Result<Node, ConstructionError> {
    trace!("building from JSON tag array");
    match value {
        Value::Array(items) => build_tag(items),
        other => {
            debug!(kind = kind_of(other), "rejecting non-array tag");
            Err(ConstructionError::NotATag {
                found: kind_of(other).to_string(),
            })
        }
    }
}

fn build_tag(items: &[Value]) -> Result<Node, ConstructionError> {
    let name = match items.first() {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(ConstructionError::InvalidName {
                found: other.to_string(),
            })
        }
        None => {
            return Err(ConstructionError::InvalidName {
                found: "an empty array".to_string(),
            })
        }
    };

    match name.as_str() {
        "#text" => return leaf(name, items).map(Node::text),
        "#comment" => return leaf(name, items).map(Node::comment),
        "#raw" => return leaf(name, items).map(Node::raw),
        "!DOCTYPE" => return leaf(name, items).map(Node::doctype),
        _ => {}
    }

    let mut builder = ElementBuilder::new(name.clone());

    for (index, item) in items.iter().enumerate().skip(1) {
        if let Err(err) = append(&mut builder, item) {
            // Only failures inside nested arrays get a location frame
            return Err(match item {
                Value::Array(_) => err.nested(&builder.name, &builder.attributes, index),
                _ => err,
            });
        }
    }

    Ok(builder.finish().into())
}

fn leaf(marker: &str, items: &[Value]) -> Result<String, ConstructionError> {
    match items {
        [_, Value::String(data)] => Ok(data.clone()),
        _ => Err(ConstructionError::InvalidLeaf {
            marker: marker.to_string(),
        }),
    }
}

fn append(builder: &mut ElementBuilder, item: &Value) -> Result<(), ConstructionError> {
    match item {
        Value::String(token) => builder.add_class(token),

        Value::Null => {}

        Value::Object(record) => {
            let mut attributes = tagtree_core::Attributes::new();
            for (attribute, value) in record {
                match value {
                    Value::String(value) => {
                        attributes.insert(attribute.clone(), value.clone());
                    }
                    other => {
                        return Err(ConstructionError::UnsupportedAttributeValue {
                            element: builder.name.clone(),
                            attribute: attribute.clone(),
                            kind: kind_of(other),
                        })
                    }
                }
            }
            builder.set_attributes(attributes);
        }

        Value::Array(nested) => match nested.first() {
            Some(Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
                let child = build_tag(nested)?;
                builder.children.push(child);
            }
            _ => {
                for item in nested {
                    append(builder, item)?;
                }
            }
        },

        Value::Number(_) | Value::Bool(_) => {
            return Err(ConstructionError::UnsupportedChild {
                element: builder.name.clone(),
                kind: kind_of(item),
            })
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
