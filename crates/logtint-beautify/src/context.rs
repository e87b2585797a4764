//! Per-run context handed to preprocessors

/// Information from outside the line itself that influences styling.
///
/// Built once by the line driver and shared by every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeautifyContext {
    base_package: Option<String>,
}

impl BeautifyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the project's base package. An empty package is the same
    /// as none.
    pub fn with_base_package(base_package: impl Into<String>) -> Self {
        let base_package = base_package.into();
        Self {
            base_package: (!base_package.trim().is_empty()).then(|| base_package.trim().to_string()),
        }
    }

    pub fn base_package(&self) -> Option<&str> {
        self.base_package.as_deref()
    }
}
