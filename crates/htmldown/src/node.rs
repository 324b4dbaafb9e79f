//! DOM node structure consumed by the converter.
//!
//! Any parser can build this tree. The bundled [`parse_html`](crate::parse_html)
//! adapter produces it from html5ever output; tests and callers with an
//! existing DOM can construct it by hand.

use std::ops::Deref;

use crate::utilities::is_void;

/// Node kinds the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
}

/// A single `name="value"` pair, kept in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A DOM node.
///
/// Parents own their children. Sibling and parent navigation happens through
/// [`NodeRef`], which the traversal hands out while it walks the tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node kind
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text`, `#comment` or `#document` otherwise
    pub node_name: String,

    /// Character data for text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order (elements only)
    pub attributes: Vec<Attribute>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty document node
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            node_name: "#document".to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(name, value)| Attribute {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    pub fn is_comment(&self) -> bool {
        self.node_type == NodeType::Comment
    }

    /// Check whether this is an element with the given (lowercase) tag name
    pub fn is_tag(&self, name: &str) -> bool {
        self.is_element() && self.node_name == name
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Character data of a text or comment node, empty otherwise
    pub fn value(&self) -> &str {
        self.node_value.as_deref().unwrap_or("")
    }

    /// Get an attribute value by name. The first matching attribute wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// Check if the whitespace-separated `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value().to_string(),
            NodeType::Comment => String::new(),
            _ => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Serialize back to HTML (for raw passthrough).
    ///
    /// Text is written as-is: the only elements passed through are `script`
    /// and `style`, whose content is raw text.
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value().to_string(),
            NodeType::Comment => format!("<!--{}-->", self.value()),
            NodeType::Element => {
                let tag = self.tag_name();
                let attrs = self.attributes_string();
                let open = if attrs.is_empty() {
                    format!("<{}>", tag)
                } else {
                    format!("<{} {}>", tag, attrs)
                };

                if is_void(tag) {
                    open
                } else {
                    format!("{}{}</{}>", open, self.inner_html(), tag)
                }
            }
            NodeType::Document => self.inner_html(),
        }
    }

    /// Serialize the children back to HTML
    pub fn inner_html(&self) -> String {
        self.children().map(|child| child.outer_html()).collect()
    }

    fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|attr| format!("{}=\"{}\"", attr.name, escape_html_attr(&attr.value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A node together with its position in the parent.
///
/// The tree has no parent pointers; the traversal creates a `NodeRef` for
/// every child it visits so rules can look at the parent tag and the previous
/// sibling.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
    parent: Option<&'a Node>,
    index: usize,
}

impl<'a> NodeRef<'a> {
    /// A node with no parent context (the root of a conversion)
    pub fn root(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            index: 0,
        }
    }

    /// The `index`-th child of `parent`
    pub fn child(parent: &'a Node, index: usize) -> Option<Self> {
        parent.children.get(index).map(|node| Self {
            node,
            parent: Some(parent),
            index,
        })
    }

    /// Cursors over every child of `parent`, in document order
    pub fn children_of(parent: &'a Node) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        parent
            .children
            .iter()
            .enumerate()
            .map(move |(index, node)| Self {
                node,
                parent: Some(parent),
                index,
            })
    }

    pub fn parent(&self) -> Option<&'a Node> {
        self.parent
    }

    /// Get the parent tag name if known
    pub fn parent_tag(&self) -> Option<&'a str> {
        self.parent()
            .filter(|p| p.is_element())
            .map(|p| p.node_name.as_str())
    }

    /// Check whether the immediate parent is an element named `tag`
    pub fn is_child_of(&self, tag: &str) -> bool {
        self.parent_tag() == Some(tag)
    }

    /// The sibling immediately before this node, of any kind
    pub fn prev_sibling(&self) -> Option<&'a Node> {
        let parent = self.parent?;
        self.index
            .checked_sub(1)
            .and_then(|i| parent.children.get(i))
    }
}

impl Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert!(node.is_tag("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes_first_match_wins() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "first"), ("HREF", "second"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("first"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_has_class() {
        let node = Node::element_with_attrs("blockquote", vec![("class", "note  code")]);
        assert!(node.has_class("code"));
        assert!(!node.has_class("cod"));
    }

    #[test]
    fn test_text_content_skips_comments() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        div.add_child(Node::comment("hidden"));
        let mut span = Node::element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_outer_html() {
        let mut script = Node::element_with_attrs(
            "script",
            vec![("type", "text/javascript"), ("data-x", "a\"b")],
        );
        script.add_child(Node::text("if (a < b) {}"));

        assert_eq!(
            script.outer_html(),
            "<script type=\"text/javascript\" data-x=\"a&quot;b\">if (a < b) {}</script>"
        );
    }

    #[test]
    fn test_void_element_html() {
        let img = Node::element_with_attrs("img", vec![("src", "test.png"), ("alt", "Test")]);
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"Test\">");
    }

    #[test]
    fn test_node_ref_siblings() {
        let mut ul = Node::element("ul");
        ul.add_child(Node::text("\n"));
        ul.add_child(Node::element("li"));

        let first = NodeRef::child(&ul, 0).unwrap();
        assert!(first.prev_sibling().is_none());

        let li = NodeRef::child(&ul, 1).unwrap();
        assert!(li.parent().unwrap().is_tag("ul"));
        assert!(li.is_child_of("ul"));
        assert!(li.prev_sibling().unwrap().is_text());
        assert!(NodeRef::child(&ul, 2).is_none());
    }

    #[test]
    fn test_root_has_no_parent() {
        let p = Node::element("p");
        let root = NodeRef::root(&p);
        assert!(root.parent().is_none());
        assert_eq!(root.parent_tag(), None);
        assert!(root.prev_sibling().is_none());
    }
}
