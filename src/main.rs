//! logtint - Colorizes Spring Boot, Gradle and Maven console output
//!
//! This is the binary entry point. All logic lives in the library crates.
//!
//! ```bash
//! ./gradlew bootRun | logtint
//! ./mvnw spring-boot:run 2>&1 | logtint --base-package com.example.shop
//! ```

use std::path::PathBuf;

use clap::Parser;
use logtint_app::{config, ColorMode, RunOptions};
use tracing::info;

/// logtint - Colorizes Spring Boot, Gradle and Maven console output read from stdin
#[derive(Parser, Debug)]
#[command(name = "logtint", version)]
#[command(about = "Colorizes Spring Boot, Gradle and Maven console output", long_about = None)]
struct Args {
    /// Project directory (config file and source tree lookup)
    #[arg(long, value_name = "PATH")]
    project: Option<PathBuf>,

    /// Package whose stack frames are highlighted (skips discovery)
    #[arg(long, value_name = "PACKAGE")]
    base_package: Option<String>,

    /// Seconds of silence before a separator banner is printed
    #[arg(long, value_name = "SECS")]
    idle_gap: Option<u64>,

    /// Never print separator banners
    #[arg(long)]
    no_separator: bool,

    /// When to style output: auto, always or never
    #[arg(long, value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Write a default .logtint/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Logs go to a file; stdout is the product
    if let Err(e) = logtint_core::logging::init() {
        eprintln!("logtint: logging disabled: {e}");
    }

    let project = args
        .project
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = config::init_config_dir(&project)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let options = RunOptions {
        project,
        base_package: args.base_package,
        idle_gap_secs: args.idle_gap,
        no_separator: args.no_separator,
        color: args.color,
    };

    let stats = logtint_app::run(&options)?;
    info!(lines = stats.lines, matched = stats.matched, "Finished");
    Ok(())
}
