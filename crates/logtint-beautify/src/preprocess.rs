//! Field reclassification run between matching and styling.
//!
//! Preprocessors rename fields based on what was seen elsewhere in the same
//! line. Both are written as folds over the field list so they stay pure and
//! can be tested without a rule around them.

use crate::context::BeautifyContext;
use crate::field::{names, Field};

/// Reclassification hook attached to a rule
pub type Preprocessor = for<'a> fn(Vec<Field<'a>>, &BeautifyContext) -> Vec<Field<'a>>;

/// Logger Hibernate uses for `spring.jpa.show-sql`-style statement dumps
pub const SQL_LOGGER: &str = "org.hibernate.SQL";

/// Class prefixes of JDK-internal frames
pub const INTERNAL_NAMESPACES: &[&str] = &["java.base", "jdk.internal."];

/// Everything after a `logger` field equal to [`SQL_LOGGER`] becomes
/// `sql_debug`, so the statement dump renders uniformly faint.
pub fn sql_debug<'a>(fields: Vec<Field<'a>>, _ctx: &BeautifyContext) -> Vec<Field<'a>> {
    fields
        .into_iter()
        .scan(false, |sql_active, field| {
            if *sql_active {
                return Some(field.relabel(names::SQL_DEBUG));
            }
            if field.is_named(names::LOGGER) && field.value == SQL_LOGGER {
                *sql_active = true;
            }
            Some(field)
        })
        .collect()
}

/// Who a stack frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameOwner {
    /// Third-party or framework code
    #[default]
    Library,
    /// JDK internals
    Internal,
    /// The project's own code
    Project,
}

/// Classify a frame by its `class` field
pub fn classify_frame(fields: &[Field<'_>], base_package: Option<&str>) -> FrameOwner {
    fields
        .iter()
        .fold(None, |owner, field| match owner {
            Some(_) => owner,
            None if field.is_named(names::CLASS) => Some(owner_of(field.value, base_package)),
            None => None,
        })
        .unwrap_or_default()
}

fn owner_of(class: &str, base_package: Option<&str>) -> FrameOwner {
    if INTERNAL_NAMESPACES.iter().any(|ns| class.starts_with(ns)) {
        return FrameOwner::Internal;
    }

    match base_package {
        Some(base) if !base.is_empty() && in_package(strip_loader(class), base) => {
            FrameOwner::Project
        }
        _ => FrameOwner::Library,
    }
}

/// `app//com.example.Foo.` → `com.example.Foo.`
fn strip_loader(class: &str) -> &str {
    class.rsplit_once('/').map_or(class, |(_, name)| name)
}

fn in_package(class: &str, base: &str) -> bool {
    class
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

fn project_variant(name: &str) -> Option<&'static str> {
    match name {
        names::CLASS => Some(names::PROJECT_CLASS),
        names::METHOD => Some(names::PROJECT_METHOD),
        names::FILE => Some(names::PROJECT_FILE),
        names::NO_FILE => Some(names::PROJECT_NO_FILE),
        _ => None,
    }
}

/// Internal frames are relabeled wholesale to `internal_frame`; project
/// frames get `project_*` names on their frame-identifying fields.
pub fn frame_ownership<'a>(fields: Vec<Field<'a>>, ctx: &BeautifyContext) -> Vec<Field<'a>> {
    match classify_frame(&fields, ctx.base_package()) {
        FrameOwner::Library => fields,
        FrameOwner::Internal => fields
            .into_iter()
            .map(|f| f.relabel(names::INTERNAL_FRAME))
            .collect(),
        FrameOwner::Project => fields
            .into_iter()
            .map(|f| match f.name.and_then(project_variant) {
                Some(name) => f.relabel(name),
                None => f,
            })
            .collect(),
    }
}
