//! Configuration types for logtint
//!
//! Defines:
//! - `Settings` - Contents of `.logtint/config.toml`
//! - `ColorMode` - When to emit styling
//! - Per-section settings structs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use logtint_core::DEFAULT_SOURCE_ROOTS;

/// When styled output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Application settings (.logtint/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub separator: SeparatorSettings,

    #[serde(default)]
    pub stack_trace: StackTraceSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorMode,
}

/// Banner printed when the stream resumes after a quiet period
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeparatorSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Quiet period after which the next line gets a separator
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_secs: u64,
}

impl Default for SeparatorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            idle_threshold_secs: default_idle_threshold(),
        }
    }
}

impl SeparatorSettings {
    pub fn idle_threshold(&self) -> Duration {
        Duration::from_secs(self.idle_threshold_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StackTraceSettings {
    /// Package whose frames are highlighted; empty means discover it
    #[serde(default)]
    pub base_package: String,

    /// Directories searched for the base package, relative to the project
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
}

impl Default for StackTraceSettings {
    fn default() -> Self {
        Self {
            base_package: String::new(),
            source_roots: default_source_roots(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_idle_threshold() -> u64 {
    5
}

fn default_source_roots() -> Vec<String> {
    DEFAULT_SOURCE_ROOTS.iter().map(|s| s.to_string()).collect()
}
