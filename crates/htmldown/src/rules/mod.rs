//! Rule system for HTML to Markdown conversion.

pub(crate) mod commonmark;
mod rule;
pub(crate) mod table;

pub use rule::{Handler, Next, Rule};

use indexmap::IndexMap;

/// Extension rules keyed by tag name.
///
/// Built once per conversion and read-only afterwards. When several rules
/// target the same tag, the one registered last wins.
#[derive(Debug, Default, Clone)]
pub struct Rules {
    custom_rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an ordered rule list
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Self {
        let mut registry = Self::new();
        for rule in rules {
            registry.add(rule.clone());
        }
        registry
    }

    /// Add a custom rule, replacing any earlier rule for the same tag
    pub fn add(&mut self, rule: Rule) {
        let tag = rule.tag().to_string();
        if self.custom_rules.contains_key(&tag) {
            log::debug!("rule for <{}> replaces an earlier registration", tag);
        }
        self.custom_rules.insert(tag, rule);
    }

    /// Find the rule registered for a tag
    pub fn for_tag(&self, tag: &str) -> Option<&Rule> {
        self.custom_rules.get(tag)
    }

    pub fn len(&self) -> usize {
        self.custom_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom_rules.is_empty()
    }
}
