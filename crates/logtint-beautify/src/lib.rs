//! # logtint-beautify - Beautifier Engine
//!
//! Turns one plain log line into one styled line. Depends only on
//! `logtint-core`.
//!
//! ## Pipeline
//!
//! ```text
//! Registry ──► Rule: match ──► Vec<Field> ──► Preprocessor ──► FieldStyles ──► String
//! ```
//!
//! The first rule (in priority order) whose pattern matches styles the line.
//! Lines no rule matches are passed through untouched.
//!
//! ## Public API
//!
//! - [`Registry`] - Ordered rules, first match wins
//! - [`Rule`] - Alternative patterns, a style table and an optional preprocessor
//! - [`Field`] - Named (or literal) span of a matched line
//! - [`FieldStyles`] / [`StyleOp`] - Field name → styling operation
//! - [`BeautifyContext`] - Per-run context such as the project's base package
//! - [`color_for()`] - Deterministic logger-name color
//! - [`highlight_urls()`] - Underline URLs in free text

pub mod color;
pub mod context;
pub mod field;
pub mod preprocess;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod style;
pub mod url;

pub use color::{color_for, render_logger, LoggerColor};
pub use context::BeautifyContext;
pub use field::{reassemble, Field};
pub use preprocess::{FrameOwner, Preprocessor};
pub use registry::Registry;
pub use rule::Rule;
pub use rules::builtin_rules;
pub use style::{FieldStyles, StyleOp};
pub use url::highlight_urls;
