//! Per-field styling: the closed set of styling operations and the
//! field-name → operation table each rule carries.

use std::borrow::Cow;
use std::collections::HashMap;

use crossterm::style::{Color, ContentStyle, Stylize};

use crate::color::render_logger;
use crate::field::Field;
use crate::url::highlight_urls;

/// How a field's text is decorated
#[derive(Debug, Clone, PartialEq)]
pub enum StyleOp {
    /// Fixed attributes and colors
    Plain(ContentStyle),
    /// Severity block: black bold text on a severity-keyed background
    Severity,
    /// Bracketed build-tool level such as `[WARNING]`, colored by severity
    SeverityText,
    /// Logger name in its generated color
    Logger,
    /// Free text with URLs underlined
    Urls,
    /// Gradle task outcome (`UP-TO-DATE`, `FAILED`, ...)
    TaskOutcome,
}

impl StyleOp {
    pub fn plain(style: ContentStyle) -> Self {
        Self::Plain(style)
    }

    pub fn faint() -> Self {
        Self::Plain(ContentStyle::new().dim())
    }

    pub fn bold() -> Self {
        Self::Plain(ContentStyle::new().bold())
    }

    pub fn fg(color: Color) -> Self {
        Self::Plain(ContentStyle::new().with(color))
    }

    pub fn fg_bold(color: Color) -> Self {
        Self::Plain(ContentStyle::new().with(color).bold())
    }

    /// Decorate `value`. Empty values are emitted as-is.
    pub fn render(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        match self {
            StyleOp::Plain(style) => style.apply(value).to_string(),
            StyleOp::Severity => render_severity_block(value),
            StyleOp::SeverityText => render_severity_text(value),
            StyleOp::Logger => render_logger(value),
            StyleOp::Urls => highlight_urls(value),
            StyleOp::TaskOutcome => render_task_outcome(value),
        }
    }
}

/// Severity palette entry: background color and whether the level is fatal
pub fn severity_color(level: &str) -> (Color, bool) {
    match level {
        "TRACE" => (Color::DarkCyan, false),
        "DEBUG" => (Color::DarkBlue, false),
        "INFO" => (Color::DarkGreen, false),
        "WARN" | "WARNING" => (Color::DarkYellow, false),
        "ERROR" => (Color::DarkRed, false),
        "FATAL" => (Color::Red, true),
        _ => (Color::White, false),
    }
}

/// The whitespace captured with the level stays inside the block as padding.
fn render_severity_block(value: &str) -> String {
    let (color, fatal) = severity_color(value.trim());

    let mut style = ContentStyle::new().black().on(color).bold();
    if fatal {
        style = style.italic().underlined();
    }

    style.apply(value).to_string()
}

fn render_severity_text(value: &str) -> String {
    let level = value.trim().trim_start_matches('[').trim_end_matches(']');
    let (color, fatal) = severity_color(level);

    let mut style = ContentStyle::new().with(color).bold();
    if fatal {
        style = style.italic().underlined();
    }

    style.apply(value).to_string()
}

fn render_task_outcome(value: &str) -> String {
    let color = match value.trim() {
        "UP-TO-DATE" | "FROM-CACHE" => Color::DarkGreen,
        "FAILED" => Color::DarkRed,
        "SKIPPED" | "NO-SOURCE" => Color::DarkGrey,
        _ => Color::White,
    };

    ContentStyle::new().with(color).apply(value).to_string()
}

/// Field name → styling operation. Fields without an entry render verbatim.
#[derive(Debug, Clone, Default)]
pub struct FieldStyles {
    ops: HashMap<&'static str, StyleOp>,
}

impl FieldStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: style `name` with `op`
    pub fn with(mut self, name: &'static str, op: StyleOp) -> Self {
        self.ops.insert(name, op);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleOp> {
        self.ops.get(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Styled text for one field, or its raw value when it has no style
    pub fn render<'a>(&self, field: &Field<'a>) -> Cow<'a, str> {
        match field.name.and_then(|name| self.get(name)) {
            Some(op) => Cow::Owned(op.render(field.value)),
            None => Cow::Borrowed(field.value),
        }
    }
}
