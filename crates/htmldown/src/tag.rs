//! Built-in tag families and the name lookup table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Element families with a built-in emission rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Link,
    Strong,
    Emphasis,
    Strikethrough,
    LineBreak,
    Paragraph,
    Code,
    Pre,
    Div,
    Blockquote,
    List,
    ListItem,
    Heading(u8),
    Image,
    HorizontalRule,
    Table,
    Style,
    Script,
    /// Anything else: render the children
    Transparent,
}

static TAGS: Lazy<HashMap<&'static str, Tag>> = Lazy::new(|| {
    HashMap::from([
        ("a", Tag::Link),
        ("b", Tag::Strong),
        ("strong", Tag::Strong),
        ("i", Tag::Emphasis),
        ("em", Tag::Emphasis),
        ("del", Tag::Strikethrough),
        ("s", Tag::Strikethrough),
        ("br", Tag::LineBreak),
        ("p", Tag::Paragraph),
        ("code", Tag::Code),
        ("pre", Tag::Pre),
        ("div", Tag::Div),
        ("blockquote", Tag::Blockquote),
        ("ul", Tag::List),
        ("ol", Tag::List),
        ("li", Tag::ListItem),
        ("h1", Tag::Heading(1)),
        ("h2", Tag::Heading(2)),
        ("h3", Tag::Heading(3)),
        ("h4", Tag::Heading(4)),
        ("h5", Tag::Heading(5)),
        ("h6", Tag::Heading(6)),
        ("img", Tag::Image),
        ("hr", Tag::HorizontalRule),
        ("table", Tag::Table),
        ("style", Tag::Style),
        ("script", Tag::Script),
    ])
});

impl Tag {
    /// Look up a lowercase tag name
    pub fn from_name(name: &str) -> Tag {
        TAGS.get(name).copied().unwrap_or(Tag::Transparent)
    }
}
