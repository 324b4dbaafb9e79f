//! Tree walker: visits DOM nodes in document order and writes Markdown.
//!
//! Every node kind maps to an emission rule. Elements are looked up first in
//! the extension [`Rules`], then in the built-in [`Tag`] table; unknown tags
//! are transparent.

use crate::node::{Node, NodeRef, NodeType};
use crate::options::Options;
use crate::rules::{commonmark, table, Rules};
use crate::tag::Tag;
use crate::utilities::{collapse_whitespace, escape_markdown};
use crate::{ConvertError, Result};

/// Per-traversal settings.
///
/// A `Context` is never mutated. Entering a list or a code block produces a
/// new value with one field changed and hands it down to the subtree.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    options: &'a Options,
    rules: &'a Rules,
    escape: bool,
    trim_space: bool,
    level: usize,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a Options, rules: &'a Rules) -> Self {
        Self {
            options,
            rules,
            escape: true,
            trim_space: options.trim_space,
            level: 0,
        }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Extension rules for this conversion
    pub fn rules(&self) -> &'a Rules {
        self.rules
    }

    /// Whether text is Markdown-escaped (false inside code)
    pub fn escapes(&self) -> bool {
        self.escape
    }

    /// Whether whitespace-only text is dropped and boundaries always break
    pub fn trim_space(&self) -> bool {
        self.trim_space
    }

    /// Current recursion level
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn with_trim_space(&self) -> Self {
        Self {
            trim_space: true,
            ..*self
        }
    }

    pub fn without_escaping(&self) -> Self {
        Self {
            escape: false,
            ..*self
        }
    }

    /// One level deeper, or an error once `max_depth` is reached
    pub fn descend(&self) -> Result<Self> {
        let limit = self.options.max_depth;
        if self.level >= limit {
            log::warn!("document nesting exceeds {} levels, giving up", limit);
            return Err(ConvertError::TooDeep { limit });
        }
        Ok(Self {
            level: self.level + 1,
            ..*self
        })
    }

    /// Run the configured language guesser. Failures are not fatal: the
    /// fence just stays untagged.
    pub fn guess_language(&self, code: &str) -> Option<String> {
        let guess = self.options.guess_lang.as_ref()?;
        match guess(code) {
            Ok(language) => Some(language),
            Err(err) => {
                log::debug!("language guess failed: {}", err);
                None
            }
        }
    }
}

/// Convert a root node: elements are rendered as themselves, anything else
/// through its children.
pub(crate) fn convert(node: &Node, out: &mut String, cx: &Context<'_>) -> Result<()> {
    match node.node_type {
        NodeType::Element => dispatch(NodeRef::root(node), out, 0, cx, &mut 0),
        NodeType::Comment => {
            write_comment(node, out);
            Ok(())
        }
        _ => walk(node, out, 0, cx),
    }
}

/// Write the Markdown rendering of `node`'s children to `out`.
///
/// If `node` is itself a text node, its text comes first. This is the
/// continuation passed to extension rules.
pub fn walk(node: &Node, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    let cx = cx.descend()?;

    if node.is_text() {
        write_text(node.value(), out, &cx);
    }

    // Position among the <li> children of an <ol>
    let mut ordinal = 0;

    for child in NodeRef::children_of(node) {
        match child.node_type {
            NodeType::Comment => write_comment(&child, out),
            NodeType::Element => dispatch(child, out, depth, &cx, &mut ordinal)?,
            _ => walk(&child, out, depth, &cx)?,
        }
    }

    Ok(())
}

fn dispatch(
    node: NodeRef<'_>,
    out: &mut String,
    depth: usize,
    cx: &Context<'_>,
    ordinal: &mut usize,
) -> Result<()> {
    if let Some(rule) = cx.rules().for_tag(node.tag_name()) {
        log::trace!("custom rule for <{}>", node.tag_name());
        return rule.apply(node, out, depth, cx, &walk);
    }

    match Tag::from_name(node.tag_name()) {
        Tag::Link => commonmark::link(node, out, depth, cx),
        Tag::Strong => commonmark::delimited(node, out, depth, cx, "**", "**"),
        Tag::Emphasis => commonmark::delimited(node, out, depth, cx, "_", "_"),
        Tag::Strikethrough => commonmark::delimited(node, out, depth, cx, "~~", "~~"),
        Tag::LineBreak => {
            commonmark::line_break(node, out, cx);
            Ok(())
        }
        Tag::Paragraph => commonmark::paragraph(node, out, depth, cx),
        Tag::Code => commonmark::code(node, out, depth, cx),
        Tag::Pre => commonmark::pre(node, out, cx),
        Tag::Div => commonmark::div(node, out, depth, cx),
        Tag::Blockquote => commonmark::blockquote(node, out, depth, cx),
        Tag::List => commonmark::list(node, out, depth, cx),
        Tag::ListItem => commonmark::list_item(node, out, depth, cx, ordinal),
        Tag::Heading(level) => commonmark::heading(node, out, depth, cx, level),
        Tag::Image => {
            commonmark::image(node, out);
            Ok(())
        }
        Tag::HorizontalRule => {
            commonmark::horizontal_rule(node, out, cx);
            Ok(())
        }
        Tag::Table => table::table(node, out, cx),
        Tag::Style => {
            commonmark::raw_html(node, out, cx, cx.options().style);
            Ok(())
        }
        Tag::Script => {
            commonmark::raw_html(node, out, cx, cx.options().script);
            Ok(())
        }
        Tag::Transparent => walk(&node, out, depth, cx),
    }
}

fn write_text(text: &str, out: &mut String, cx: &Context<'_>) {
    if cx.trim_space() && text.trim().is_empty() {
        return;
    }

    let text = collapse_whitespace(text);
    if cx.escapes() {
        out.push_str(&escape_markdown(&text));
    } else {
        out.push_str(&text);
    }
}

fn write_comment(node: &Node, out: &mut String) {
    out.push_str("<!--");
    out.push_str(node.value());
    out.push_str("-->\n");
}
