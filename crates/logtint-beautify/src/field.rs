//! Named text spans extracted from a matched line

/// Separator between a field name and a disambiguating tag in a capture
/// group name: `method__close` is emitted as a `method` field.
pub const NAME_TAG_SEPARATOR: &str = "__";

/// Field names shared between rule definitions and preprocessors
pub mod names {
    pub const TIMESTAMP: &str = "timestamp";
    pub const LEVEL: &str = "level";
    pub const LOGGER: &str = "logger";
    pub const MESSAGE: &str = "message";
    pub const SQL_DEBUG: &str = "sql_debug";

    pub const CLASS: &str = "class";
    pub const METHOD: &str = "method";
    pub const FILE: &str = "file";
    pub const NO_FILE: &str = "no_file";
    pub const INTERNAL_FRAME: &str = "internal_frame";
    pub const PROJECT_CLASS: &str = "project_class";
    pub const PROJECT_METHOD: &str = "project_method";
    pub const PROJECT_FILE: &str = "project_file";
    pub const PROJECT_NO_FILE: &str = "project_no_file";
}

/// A span of the input line.
///
/// Named fields come from named capture groups. Anonymous fields
/// (`name == None`) hold everything else: unnamed groups, literal pattern
/// text and, for unanchored patterns, the text around the match. They are
/// emitted verbatim unless a preprocessor relabels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: Option<&'a str>,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn named(name: &'a str, value: &'a str) -> Self {
        Self {
            name: Some(name),
            value,
        }
    }

    pub fn literal(value: &'a str) -> Self {
        Self { name: None, value }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == Some(name)
    }

    /// Same span under a different name
    pub fn relabel(self, name: &'a str) -> Self {
        Self {
            name: Some(name),
            value: self.value,
        }
    }
}

/// Field name for a capture group name, dropping any `__tag` suffix
pub fn field_name(capture_name: &str) -> &str {
    capture_name
        .split_once(NAME_TAG_SEPARATOR)
        .map_or(capture_name, |(name, _)| name)
}

/// Concatenate field values without styling.
///
/// For any successfully extracted field list this reproduces the input line.
pub fn reassemble(fields: &[Field<'_>]) -> String {
    fields.iter().map(|f| f.value).collect()
}
