//! Built-in emission rules for inline and block elements.

use crate::convert::{walk, Context};
use crate::node::{Node, NodeRef, NodeType};
use crate::utilities::{is_blank, is_boundary, quote, wrap_non_whitespace};
use crate::Result;

const FENCE: &str = "```";

/// Indentation unit for nested list content
const INDENT: &str = "    ";

/// Insert a newline if the previous sibling leaves the output mid-line.
///
/// In trim-space mode whitespace text has already been dropped, so any
/// previous sibling forces the break.
pub fn boundary(node: &NodeRef<'_>, out: &mut String, cx: &Context<'_>) {
    let Some(prev) = node.prev_sibling() else {
        return;
    };

    if cx.trim_space() {
        out.push('\n');
        return;
    }

    let needs_break = match prev.node_type {
        NodeType::Text => {
            let text = prev.value().trim_matches(|c| c == ' ' || c == '\t');
            !text.is_empty() && !text.ends_with('\n')
        }
        NodeType::Element => is_boundary(prev.tag_name()),
        _ => false,
    };

    if needs_break {
        out.push('\n');
    }
}

/// Render the children of `node` into a scratch buffer
fn render(node: &Node, depth: usize, cx: &Context<'_>) -> Result<String> {
    let mut buf = String::new();
    walk(node, &mut buf, depth, cx)?;
    Ok(buf)
}

/// `**`, `_`, `~~` and friends around the non-whitespace content
pub fn delimited(
    node: NodeRef<'_>,
    out: &mut String,
    depth: usize,
    cx: &Context<'_>,
    before: &str,
    after: &str,
) -> Result<()> {
    let content = render(&node, depth, cx)?;
    out.push_str(&wrap_non_whitespace(&content, before, after));
    Ok(())
}

pub fn link(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    let href = node.attr("href").unwrap_or("");
    let end = match node.attr("title").filter(|t| !t.is_empty()) {
        Some(title) => format!("]({} {})", href, quote(title)),
        None => format!("]({})", href),
    };
    delimited(node, out, depth, cx, "[", &end)
}

pub fn image(node: NodeRef<'_>, out: &mut String) {
    let src = node.attr("src").unwrap_or("");
    if src.is_empty() {
        return;
    }

    let alt = node.attr("alt").unwrap_or("");
    let markdown = match node.attr("title").filter(|t| !t.is_empty()) {
        Some(title) => format!("![{}]({} {})", alt, src, quote(title)),
        None => format!("![{}]({})", alt, src),
    };
    out.push_str(&markdown);
}

pub fn line_break(node: NodeRef<'_>, out: &mut String, cx: &Context<'_>) {
    boundary(&node, out, cx);
    out.push_str("\n\n");
}

pub fn paragraph(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);
    walk(&node, out, depth, cx)?;
    boundary(&node, out, cx);
    out.push_str("\n\n");
    Ok(())
}

pub fn div(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);
    walk(&node, out, depth, cx)?;
    out.push('\n');
    Ok(())
}

pub fn heading(
    node: NodeRef<'_>,
    out: &mut String,
    depth: usize,
    cx: &Context<'_>,
    level: u8,
) -> Result<()> {
    boundary(&node, out, cx);
    out.push_str(&"#".repeat(usize::from(level)));
    out.push(' ');
    walk(&node, out, depth, cx)?;
    out.push_str("\n\n");
    Ok(())
}

pub fn horizontal_rule(node: NodeRef<'_>, out: &mut String, cx: &Context<'_>) {
    boundary(&node, out, cx);
    out.push_str("\n---\n\n");
}

/// Inline code. Directly inside `<pre>` (reachable only through a custom
/// `pre` rule) the element is transparent.
pub fn code(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    if node.is_child_of("pre") {
        return walk(&node, out, depth, cx);
    }

    out.push('`');
    raw_text(&node, out, &cx.without_escaping())?;
    out.push('`');
    Ok(())
}

pub fn pre(node: NodeRef<'_>, out: &mut String, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);

    let mut code = String::new();
    raw_text(&node, &mut code, &cx.without_escaping())?;

    let language = cx
        .guess_language(&code)
        .or_else(|| language_from_class(&node).map(str::to_string));

    fenced(out, language.as_deref(), &code, code.ends_with('\n'));
    Ok(())
}

pub fn blockquote(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);

    if node.has_class("code") {
        let text = node.text_content().replace('\u{a0}', " ");
        let language = cx.guess_language(&text);
        fenced(
            out,
            language.as_deref(),
            text.trim_start_matches('\n'),
            text.ends_with('\n'),
        );
        return Ok(());
    }

    let content = render(&node, depth + 1, cx)?;
    for line in content.trim().split('\n') {
        out.push_str("> ");
        out.push_str(line.trim());
        out.push('\n');
    }
    out.push('\n');
    Ok(())
}

/// `<ul>` and `<ol>`: the body is rendered one level deeper with trim-space
/// on, then blank lines are dropped.
pub fn list(node: NodeRef<'_>, out: &mut String, depth: usize, cx: &Context<'_>) -> Result<()> {
    boundary(&node, out, cx);

    let body = render(&node, depth + 1, &cx.with_trim_space())?;
    let lines: Vec<&str> = body.split('\n').filter(|line| !is_blank(line)).collect();
    out.push_str(&lines.join("\n"));
    out.push('\n');
    if depth == 0 {
        out.push('\n');
    }
    Ok(())
}

pub fn list_item(
    node: NodeRef<'_>,
    out: &mut String,
    depth: usize,
    cx: &Context<'_>,
    ordinal: &mut usize,
) -> Result<()> {
    boundary(&node, out, cx);

    let marker = if node.is_child_of("ul") {
        "* ".to_string()
    } else if node.is_child_of("ol") {
        *ordinal += 1;
        format!("{}. ", ordinal)
    } else {
        String::new()
    };

    let content = render(&node, 0, cx)?;
    let indent = INDENT.repeat(depth.saturating_sub(1));

    let mut marked = false;
    for line in content.split('\n').filter(|line| !is_blank(line)) {
        if marked {
            // Continuation lines sit under the marker
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&indent);
        } else {
            out.push_str(&indent);
            out.push_str(&marker);
            marked = true;
        }
        out.push_str(line);
    }
    out.push('\n');
    Ok(())
}

/// `<script>`/`<style>`: serialized as HTML when enabled, dropped otherwise
pub fn raw_html(node: NodeRef<'_>, out: &mut String, cx: &Context<'_>, enabled: bool) {
    if !enabled {
        return;
    }

    boundary(&node, out, cx);
    out.push_str(&node.outer_html());
    out.push_str("\n\n");
}

/// Descendant text, verbatim. Descendants with an extension rule are
/// rendered through it so callers can decorate code.
fn raw_text(node: &Node, out: &mut String, cx: &Context<'_>) -> Result<()> {
    let cx = cx.descend()?;

    for child in NodeRef::children_of(node) {
        match child.node_type {
            NodeType::Text => out.push_str(child.value()),
            NodeType::Element => match cx.rules().for_tag(child.tag_name()) {
                Some(rule) => rule.apply(child, out, 0, &cx, &walk)?,
                None => raw_text(&child, out, &cx)?,
            },
            _ => {}
        }
    }

    Ok(())
}

/// `language-xxx` class on a `<code>` first child
fn language_from_class(pre: &Node) -> Option<&str> {
    let code = pre.children.first().filter(|c| c.is_tag("code"))?;
    code.attr("class")?
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-"))
}

fn fenced(out: &mut String, language: Option<&str>, code: &str, terminated: bool) {
    out.push_str(FENCE);
    out.push_str(language.unwrap_or(""));
    out.push('\n');
    out.push_str(code);
    if !terminated {
        out.push('\n');
    }
    out.push_str(FENCE);
    out.push_str("\n\n");
}
