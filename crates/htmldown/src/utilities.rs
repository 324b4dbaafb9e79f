//! Utility functions and constants for HTML processing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements that end a line, so a following block needs no extra newline
pub const BOUNDARY_ELEMENTS: &[&str] = &[
    "br", "p", "ul", "ol", "div", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:space:]]+").expect("whitespace pattern is valid"));

/// Check if a tag terminates a line for the boundary rule
pub fn is_boundary(tag: &str) -> bool {
    BOUNDARY_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape markdown special characters
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '[' | ']' | '(' | ')' | '<' | '>' | '#' | '+' | '-' | '!'
            | '`' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Normalize the data of a text node: line breaks and tabs at either end are
/// dropped, then every whitespace run becomes a single space.
///
/// Spaces at the ends survive so that `a <b>b</b>` keeps its separator.
pub fn collapse_whitespace(text: &str) -> String {
    let trimmed = text.trim_matches(|c| matches!(c, '\t' | '\r' | '\n'));
    WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
}

/// Wrap `before`/`after` around the non-whitespace extent of `content`.
///
/// A delimiter run next to whitespace is not a valid flanking run, so leading
/// and trailing whitespace stays outside. All-whitespace content is returned
/// unchanged without delimiters.
pub fn wrap_non_whitespace(content: &str, before: &str, after: &str) -> String {
    let inner = content.trim();
    if inner.is_empty() {
        return content.to_string();
    }

    let start = content.len() - content.trim_start().len();
    let stop = start + inner.len();

    let mut result = String::with_capacity(content.len() + before.len() + after.len());
    result.push_str(&content[..start]);
    result.push_str(before);
    result.push_str(inner);
    result.push_str(after);
    result.push_str(&content[stop..]);
    result
}

/// Double-quote a link or image title
pub fn quote(title: &str) -> String {
    format!("\"{}\"", title.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Check whether a line holds nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
