//! # logtint-core - Core Types
//!
//! Foundation crate for logtint. Provides error handling, logging setup,
//! ANSI escape handling and base-package discovery.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### ANSI (`ansi`)
//! - [`strip_ansi_codes()`] - Remove escape sequences, keeping visible text
//! - [`contains_ansi_codes()`] - Detect pre-colored input
//!
//! ### Discovery (`discovery`)
//! - [`discover_base_package()`] - Derive the project's base package from its source tree
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use logtint_core::prelude::*;
//! ```

pub mod ansi;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use ansi::{contains_ansi_codes, strip_ansi_codes};
pub use discovery::{discover_base_package, DEFAULT_MAX_DEPTH, DEFAULT_SOURCE_ROOTS};
pub use error::{Error, Result, ResultExt};
