//! Ordered rule set applied to each input line

use std::borrow::Cow;

use logtint_core::prelude::*;

use crate::context::BeautifyContext;
use crate::rule::Rule;
use crate::rules::builtin_rules;

/// Rules in evaluation order. The first rule whose pattern matches styles
/// the line; later rules never see it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    /// Registry over `rules`, ordered by descending priority. Rules with the
    /// same priority keep the order they were given in.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        // sort_by_key is stable
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority()));
        Self { rules }
    }

    /// The built-in Spring Boot / Gradle / Maven rule set
    pub fn builtin() -> Result<Self> {
        let registry = Self::new(builtin_rules()?);
        debug!(rules = registry.len(), "Built-in rules compiled");
        Ok(registry)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Styled line from the first matching rule, `None` when nothing matches
    pub fn beautify(&self, line: &str, ctx: &BeautifyContext) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            let styled = rule.apply(line, ctx)?;
            trace!(rule = rule.name(), "Line matched");
            Some(styled)
        })
    }

    /// Styled line and whether any rule matched. Unmatched lines come back
    /// borrowed and byte-identical.
    pub fn apply<'l>(&self, line: &'l str, ctx: &BeautifyContext) -> (Cow<'l, str>, bool) {
        match self.beautify(line, ctx) {
            Some(styled) => (Cow::Owned(styled), true),
            None => (Cow::Borrowed(line), false),
        }
    }
}
