//! Configuration file parsing for logtint
//!
//! Supports:
//! - `.logtint/config.toml` - Output, separator and stack-trace settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
