//! logtint-app - Configuration and stream orchestration for logtint
//!
//! Resolves settings (CLI over `.logtint/config.toml` over defaults), works
//! out the project's base package, and runs the line driver over
//! stdin/stdout.

pub mod config;
pub mod driver;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use crossterm::style::{Color, ContentStyle, Stylize};
use logtint_beautify::{BeautifyContext, Registry};
use logtint_core::discover_base_package;
use logtint_core::prelude::*;

pub use config::{ColorMode, Settings};
pub use driver::{DriverStats, LineDriver};

/// Command-line overrides for one run. `None` means "use the config file".
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub project: PathBuf,
    pub base_package: Option<String>,
    pub idle_gap_secs: Option<u64>,
    pub no_separator: bool,
    pub color: Option<ColorMode>,
}

impl RunOptions {
    /// Merge these overrides into the settings loaded from disk
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(base_package) = &self.base_package {
            settings.stack_trace.base_package = base_package.clone();
        }
        if let Some(secs) = self.idle_gap_secs {
            settings.separator.idle_threshold_secs = secs;
        }
        if self.no_separator {
            settings.separator.enabled = false;
        }
        if let Some(color) = self.color {
            settings.output.color = color;
        }
        settings
    }
}

/// Beautify stdin to stdout until EOF.
///
/// A reader closing our stdout (`logtint | head`) ends the run normally.
pub fn run(options: &RunOptions) -> Result<DriverStats> {
    let settings = options.apply_to(config::load_settings(&options.project));
    info!(project = ?options.project, ?settings, "Starting");

    let registry = Registry::builtin().context("Built-in rules failed to compile")?;
    let ctx = match resolve_base_package(&options.project, &settings) {
        Some(base_package) => BeautifyContext::with_base_package(base_package),
        None => BeautifyContext::new(),
    };

    let stdout = io::stdout();
    let styled = settings.output.color.enabled(stdout.is_terminal());
    debug!(styled, base_package = ?ctx.base_package(), "Output configured");

    let mut driver = LineDriver::new(registry, ctx, io::BufWriter::new(stdout.lock()))
        .with_separator(settings.separator)
        .with_styling(styled);

    match driver.run(io::stdin().lock()) {
        Ok(stats) => Ok(stats),
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed by reader");
            Ok(driver.stats())
        }
        Err(e) => Err(e),
    }
}

/// Base package from settings, else from the source tree. Prints a warning
/// on stderr when neither yields one.
pub fn resolve_base_package(project: &Path, settings: &Settings) -> Option<String> {
    let configured = settings.stack_trace.base_package.trim();
    if !configured.is_empty() {
        return Some(configured.to_string());
    }

    match discover_base_package(project, settings.stack_trace.source_roots.as_slice()) {
        Ok(Some(package)) => Some(package),
        Ok(None) => {
            warn_stderr("cannot determine project's base package");
            None
        }
        Err(e) => {
            warn!("Base package discovery failed: {}", e);
            warn_stderr(&format!("cannot determine project's base package: {e}"));
            None
        }
    }
}

fn warn_stderr(message: &str) {
    let stderr = io::stderr();
    let label = "Warning:";
    if stderr.is_terminal() {
        let style = ContentStyle::new().with(Color::DarkYellow).bold();
        eprintln!("{} {}", style.apply(label), message);
    } else {
        eprintln!("{label} {message}");
    }
}
