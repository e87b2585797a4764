//! Loading and initializing `.logtint/config.toml`

use std::path::{Path, PathBuf};

use logtint_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const LOGTINT_DIR: &str = ".logtint";

const DEFAULT_CONFIG: &str = r#"# logtint configuration

[output]
color = "auto"            # auto | always | never

[separator]
enabled = true
idle_threshold_secs = 5   # Quiet period before a separator banner

[stack_trace]
base_package = ""         # Empty = discover from the source tree
source_roots = ["src/main/java", "src/main/kotlin"]
"#;

/// Path of the config file for `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(LOGTINT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.logtint/config.toml`.
///
/// A missing file gives defaults. An unreadable or malformed file is logged
/// and also gives defaults, so a typo never stops the output stream.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Settings::default()
        }
    }
}

fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", config_path.display(), e)))
}

/// Create `.logtint/config.toml` with the default contents.
///
/// An existing file is left untouched. Returns the config file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let logtint_dir = project_path.join(LOGTINT_DIR);

    if !logtint_dir.exists() {
        std::fs::create_dir_all(&logtint_dir)
            .with_context(|| format!("Failed to create {}", logtint_dir.display()))?;
    }

    let config_path = logtint_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
    } else {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}
