//! # htmldown
//!
//! Convert HTML documents to Markdown.
//!
//! The converter walks a DOM tree once, depth first, and maps every element to
//! an emission rule. Common web content is covered: headings, paragraphs,
//! lists, links, images, emphasis, tables, code blocks and blockquotes.
//! Callers can override or add tags with extension [`Rule`]s and plug in a
//! language guesser for fenced code blocks.
//!
//! ## Design
//!
//! The converter consumes its own [`Node`] tree rather than a parser's types.
//! With the default `html` feature, [`parse_html`] builds that tree with
//! scraper; without it, any parser (or a hand-built tree) can feed
//! [`convert_node`].
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmldown::{convert_html, Options};
//!
//! let markdown = convert_html("<h1>Hello World</h1>", &Options::default()).unwrap();
//! assert_eq!(markdown, "# Hello World\n\n\n");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use htmldown::{convert_node, Node, Options};
//!
//! let mut ul = Node::element("ul");
//! for item in ["one", "two"] {
//!     let mut li = Node::element("li");
//!     li.add_child(Node::text(item));
//!     ul.add_child(li);
//! }
//!
//! let markdown = convert_node(&ul, &Options::default()).unwrap();
//! assert_eq!(markdown, "* one\n* two\n\n\n");
//! ```

use std::io;

pub mod convert;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod service;
mod tag;
mod utilities;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use convert::{walk, Context};
pub use node::{Attribute, Node, NodeRef, NodeType};
pub use options::{BoxError, GuessLang, Options, DEFAULT_MAX_DEPTH};
pub use rules::commonmark::boundary;
pub use rules::{Handler, Next, Rule, Rules};
#[cfg(feature = "html")]
pub use service::{convert, convert_html};
pub use service::convert_node;
pub use tag::Tag;
pub use utilities::{collapse_whitespace, escape_markdown, wrap_non_whitespace};

/// Error type for htmldown operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read input: {0}")]
    Parse(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("document nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    #[error("rule failed: {0}")]
    Rule(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
