//! The rendered output of an element.
use crate::attribute::{Attributes, Value};

use smol_str::SmolStr;

use std::fmt;

/// Tags that never have children or a closing tag.
const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

/// A rendered node.
///
/// [`Node`] implements [`Display`](fmt::Display), writing itself as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element {
        /// The name of the tag.
        tag: SmolStr,
        /// The attributes of the tag.
        attributes: Attributes,
        /// The children of the tag.
        children: Vec<Node>,
    },
    /// Some text.
    Text(String),
}

impl Node {
    /// Creates a new [`Node::Element`] without attributes or children.
    pub fn tag(tag: impl Into<SmolStr>) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Creates a new [`Node::Text`].
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Returns the tag name, if the [`Node`] is an element.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Returns the value of an attribute, if the [`Node`] is an element.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        match self {
            Node::Element { attributes, .. } => attributes.get(name),
            Node::Text(_) => None,
        }
    }

    /// Returns the children of the [`Node`].
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => f.write_str(&escape(text)),
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                write!(f, "<{tag}")?;

                for (name, value) in attributes.iter() {
                    match value {
                        Value::Bool(false) => {}
                        Value::Bool(true) => write!(f, " {name}")?,
                        value => write!(f, " {name}=\"{}\"", escape(&value.to_string()))?,
                    }
                }

                f.write_str(">")?;

                if VOID_TAGS.contains(&tag.as_str()) {
                    return Ok(());
                }

                for child in children {
                    write!(f, "{child}")?;
                }

                write!(f, "</{tag}>")
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node = Node::Element {
            tag: "p".into(),
            attributes: Attributes::new().with("class", "content"),
            children: vec![Node::text("a "), Node::tag("strong"), Node::text("b")],
        };

        assert_eq!(node.tag_name(), Some("p"));
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.children()[1].tag_name(), Some("strong"));
        assert_eq!(node.children()[0].tag_name(), None);
        assert!(node.children()[0].children().is_empty());
        assert_eq!(
            node.to_string(),
            r#"<p class="content">a <strong></strong>b</p>"#
        );
    }

    #[test]
    fn test_render_boolean_attributes() {
        let node = Node::Element {
            tag: "button".into(),
            attributes: Attributes::new()
                .with("disabled", true)
                .with("hidden", false)
                .with("tabindex", -1),
            children: Vec::new(),
        };

        assert_eq!(node.to_string(), r#"<button disabled tabindex="-1"></button>"#);
    }

    #[test]
    fn test_escape() {
        let node = Node::Element {
            tag: "a".into(),
            attributes: Attributes::new().with("title", r#"say "hi" & <leave>"#),
            children: vec![Node::text("1 < 2")],
        };

        assert_eq!(
            node.to_string(),
            r#"<a title="say &quot;hi&quot; &amp; &lt;leave&gt;">1 &lt; 2</a>"#
        );
    }

    #[test]
    fn test_void_tag() {
        let node = Node::Element {
            tag: "input".into(),
            attributes: Attributes::new().with("type", "reset"),
            children: Vec::new(),
        };

        assert_eq!(node.to_string(), r#"<input type="reset">"#);
    }
}
