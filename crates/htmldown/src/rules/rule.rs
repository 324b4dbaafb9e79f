//! Extension rule type.

use std::fmt;
use std::sync::Arc;

use crate::convert::Context;
use crate::node::{Node, NodeRef};
use crate::Result;

/// Continuation handed to a rule: the default traversal, which renders the
/// children of the given node.
pub type Next<'n> = &'n dyn Fn(&Node, &mut String, usize, &Context<'_>) -> Result<()>;

/// Type alias for rule handlers
pub type Handler =
    Arc<dyn Fn(NodeRef<'_>, &mut String, usize, &Context<'_>, Next<'_>) -> Result<()> + Send + Sync>;

/// A caller-supplied override for one tag name.
///
/// The handler fully replaces the built-in conversion of matching elements.
/// It receives the element, the output buffer, the current nesting depth and
/// context, and `next` to resume default processing on any node.
///
/// ```rust
/// use htmldown::{convert_html, Options, Rule};
///
/// let rule = Rule::for_tag("mark", |node, out, depth, cx, next| {
///     out.push_str("==");
///     next(&node, out, depth, cx)?;
///     out.push_str("==");
///     Ok(())
/// });
///
/// let options = Options::default().with_rule(rule);
/// let markdown = convert_html("<mark>hi</mark>", &options).unwrap();
/// assert_eq!(markdown, "==hi==\n");
/// ```
#[derive(Clone)]
pub struct Rule {
    tag: String,
    handler: Handler,
}

impl Rule {
    /// Create a rule that matches a single tag
    pub fn for_tag<F>(tag: &str, handler: F) -> Self
    where
        F: Fn(NodeRef<'_>, &mut String, usize, &Context<'_>, Next<'_>) -> Result<()>
            + Send
            + Sync
            + 'static,
    {
        Self {
            tag: tag.to_lowercase(),
            handler: Arc::new(handler),
        }
    }

    /// The (lowercase) tag this rule handles
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Apply this rule's handler
    pub fn apply(
        &self,
        node: NodeRef<'_>,
        out: &mut String,
        depth: usize,
        cx: &Context<'_>,
        next: Next<'_>,
    ) -> Result<()> {
        (self.handler)(node, out, depth, cx, next)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("tag", &self.tag).finish_non_exhaustive()
    }
}
