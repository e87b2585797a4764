//! A rule: one recognizable line shape and how to style it

use std::fmt;

use logtint_core::prelude::*;
use regex::Regex;

use crate::context::BeautifyContext;
use crate::field::{field_name, Field};
use crate::preprocess::Preprocessor;
use crate::style::FieldStyles;

/// One or more alternative patterns for the same kind of line, the styles
/// for the fields they capture, and an optional preprocessor.
///
/// Alternatives exist because the same logical line (say, a timestamped log
/// record) is printed slightly differently by different framework versions.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    patterns: Vec<Regex>,
    styles: FieldStyles,
    preprocessor: Option<Preprocessor>,
    priority: i32,
}

impl Rule {
    /// Compile a rule. Any invalid pattern is an error naming the rule.
    pub fn new<I, P>(name: &'static str, patterns: I, styles: FieldStyles) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()).map_err(|e| Error::pattern(name, e)))
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(Error::empty_rule(name));
        }

        Ok(Self {
            name,
            patterns,
            styles,
            preprocessor: None,
            priority: 0,
        })
    }

    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }

    /// Higher priorities are tried first; equal priorities keep registration
    /// order.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Fields of the first alternative that matches `line`
    pub fn extract<'a>(&'a self, line: &'a str) -> Option<Vec<Field<'a>>> {
        self.patterns
            .iter()
            .find_map(|pattern| extract_fields(pattern, line))
    }

    /// Match, reclassify and style `line`; `None` when no alternative matches
    pub fn apply(&self, line: &str, ctx: &BeautifyContext) -> Option<String> {
        let fields = self.extract(line)?;
        let fields = match self.preprocessor {
            Some(preprocess) => preprocess(fields, ctx),
            None => fields,
        };
        Some(self.render(&fields))
    }

    /// Concatenate every field, styled where the table has an entry
    pub fn render(&self, fields: &[Field<'_>]) -> String {
        fields.iter().map(|f| self.styles.render(f)).collect()
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("patterns", &self.patterns)
            .field("styles", &self.styles)
            .field("preprocessor", &self.preprocessor.is_some())
            .field("priority", &self.priority)
            .finish()
    }
}

/// Split `line` into fields along the named groups of `pattern`.
///
/// Every byte of the line lands in exactly one field: text not covered by a
/// named group (unnamed groups, literal pattern text, text outside an
/// unanchored match) becomes an anonymous literal field.
fn extract_fields<'a>(pattern: &'a Regex, line: &'a str) -> Option<Vec<Field<'a>>> {
    let captures = pattern.captures(line)?;

    let mut fields = Vec::new();
    let mut cursor = 0;

    for (index, name) in pattern.capture_names().enumerate().skip(1) {
        let Some(name) = name else {
            continue;
        };
        // Optional group that did not participate
        let Some(m) = captures.get(index) else {
            continue;
        };
        // Nested inside a field already emitted
        if m.start() < cursor {
            continue;
        }

        if m.start() > cursor {
            fields.push(Field::literal(&line[cursor..m.start()]));
        }
        fields.push(Field::named(field_name(name), m.as_str()));
        cursor = m.end();
    }

    if cursor < line.len() {
        fields.push(Field::literal(&line[cursor..]));
    }

    Some(fields)
}
