//! HTML parsing support.
//!
//! Parses an HTML string with scraper (html5ever) and copies the result into
//! the [`Node`] tree the converter walks. Text, comments and elements are
//! kept; doctypes and processing instructions are dropped.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::{ConvertError, Result};

/// Parse an HTML document into a Node tree.
///
/// The returned root is a document node. Like any HTML5 parser, html5ever
/// supplies the missing `html`, `head` and `body` elements. Nesting deeper
/// than `max_depth` fails with [`ConvertError::TooDeep`].
///
/// # Example
///
/// ```rust
/// use htmldown::{convert_node, parse_html, Options, DEFAULT_MAX_DEPTH};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>", DEFAULT_MAX_DEPTH).unwrap();
/// let markdown = convert_node(&node, &Options::default()).unwrap();
/// assert_eq!(markdown, "# Hello _World_\n\n\n");
/// ```
pub fn parse_html(html: &str, max_depth: usize) -> Result<Node> {
    let document = Html::parse_document(html);

    let mut root = Node::document();
    for child in document.tree.root().children() {
        append(&mut root, child.value(), ElementRef::wrap(child), 1, max_depth)?;
    }
    Ok(root)
}

fn append(
    parent: &mut Node,
    value: &ScraperNode,
    element: Option<ElementRef<'_>>,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    match value {
        ScraperNode::Text(text) => parent.add_child(Node::text(&text.text)),
        ScraperNode::Comment(comment) => parent.add_child(Node::comment(&comment.comment)),
        ScraperNode::Element(_) => {
            if let Some(element) = element {
                parent.add_child(element_to_node(element, depth, max_depth)?);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Convert a scraper element and its subtree to our Node structure
fn element_to_node(element: ElementRef<'_>, depth: usize, max_depth: usize) -> Result<Node> {
    if depth > max_depth {
        log::warn!("HTML nesting exceeds {} levels, giving up", max_depth);
        return Err(ConvertError::TooDeep { limit: max_depth });
    }

    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(element.value().name(), attrs);

    for child in element.children() {
        append(&mut node, child.value(), ElementRef::wrap(child), depth + 1, max_depth)?;
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_MAX_DEPTH;

    fn body(root: &Node) -> &Node {
        let html = root.element_children().next().unwrap();
        html.element_children().find(|n| n.is_tag("body")).unwrap()
    }

    #[test]
    fn test_parse_simple_html() {
        let root = parse_html("<p>Hello World</p>", DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(root.tag_name(), "#document");

        let p = body(&root).children().next().unwrap();
        assert!(p.is_tag("p"));
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let root = parse_html(
            r#"<script type="text/javascript" src="a.js" defer></script>"#,
            DEFAULT_MAX_DEPTH,
        )
        .unwrap();
        let html = root.element_children().next().unwrap();
        let script = html
            .element_children()
            .find(|n| n.is_tag("head"))
            .and_then(|head| head.children().next())
            .unwrap();

        let names: Vec<&str> = script.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["type", "src", "defer"]);
    }

    #[test]
    fn test_comments_are_kept() {
        let root = parse_html("<!--top--><p>x<!-- inner --></p>", DEFAULT_MAX_DEPTH).unwrap();
        assert!(root.children().next().unwrap().is_comment());

        let p = body(&root).children().next().unwrap();
        assert_eq!(p.children[1].value(), " inner ");
    }

    #[test]
    fn test_doctype_is_dropped() {
        let root = parse_html("<!DOCTYPE html><p>x</p>", DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].is_tag("html"));
    }

    #[test]
    fn test_nesting_limit() {
        let html = format!("{}x{}", "<div>".repeat(40), "</div>".repeat(40));
        let err = parse_html(&html, 20).unwrap_err();
        assert!(matches!(err, ConvertError::TooDeep { limit: 20 }));

        assert!(parse_html(&html, DEFAULT_MAX_DEPTH).is_ok());
    }
}
