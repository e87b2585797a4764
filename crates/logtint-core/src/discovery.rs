//! Base-package discovery for JVM projects
//!
//! Stack-trace frames belonging to the project being run are highlighted
//! differently from library frames. To know which frames are "ours", the
//! project's base package is derived from its source tree: the first
//! directory under a source root that branches (holds more than one entry)
//! is where the project's own code starts.
//!
//! ```text
//! src/main/java/
//! └── com/
//!     └── example/
//!         └── shop/          <- two entries: base package is com.example.shop
//!             ├── ShopApplication.java
//!             └── orders/
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Source roots searched when none are configured
pub const DEFAULT_SOURCE_ROOTS: &[&str] = &["src/main/java", "src/main/kotlin"];

/// Maximum package nesting depth that is searched
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Discover the base package of the project at `project_root`.
///
/// Source roots are tried in order; the first one that yields a package
/// wins. Returns `Ok(None)` when at least one source root exists but none of
/// them narrows down to a single package, and [`Error::NoSourceRoot`] when no
/// source root exists at all.
///
/// # Arguments
/// * `project_root` - Project directory (usually the current directory)
/// * `source_roots` - Source roots relative to `project_root`
pub fn discover_base_package<S: AsRef<Path>>(
    project_root: &Path,
    source_roots: &[S],
) -> Result<Option<String>> {
    let mut any_root_found = false;

    for source_root in source_roots {
        let root = project_root.join(source_root);
        if !root.is_dir() {
            trace!("Source root does not exist: {:?}", root);
            continue;
        }
        any_root_found = true;

        if let Some(package_dir) = find_package_dir(&root, &root, 0, DEFAULT_MAX_DEPTH)? {
            let package = package_name(&root, &package_dir)?;
            debug!("Discovered base package '{}' in {:?}", package, root);
            return Ok(Some(package));
        }

        debug!("No single base package under {:?}", root);
    }

    if any_root_found {
        Ok(None)
    } else {
        Err(Error::no_source_root(project_root))
    }
}

/// Depth-first search (lexical order) for the first branching directory
fn find_package_dir(
    root: &Path,
    dir: &Path,
    current_depth: usize,
    max_depth: usize,
) -> Result<Option<PathBuf>> {
    if current_depth > max_depth {
        return Ok(None);
    }

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) if dir == root => return Err(err.into()),
        Err(err) => {
            trace!("Cannot read directory {:?}: {}", dir, err);
            return Ok(None);
        }
    };

    let mut children: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| !is_hidden(path))
        .collect();
    children.sort();

    if children.len() > 1 {
        // Several top-level packages: nothing to single out
        return Ok(if dir == root {
            None
        } else {
            Some(dir.to_path_buf())
        });
    }

    for child in children.iter().filter(|p| p.is_dir()) {
        if let Some(found) = find_package_dir(root, child, current_depth + 1, max_depth)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// Turn `root/com/example/shop` into `com.example.shop`
fn package_name(root: &Path, package_dir: &Path) -> Result<String> {
    let relative = package_dir
        .strip_prefix(root)
        .map_err(|e| Error::discovery(format!("{:?} is outside {:?}: {}", package_dir, root, e)))?;

    let segments: Vec<&str> = relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    if segments.is_empty() {
        return Err(Error::discovery(format!(
            "{:?} is not below a package directory",
            package_dir
        )));
    }

    Ok(segments.join("."))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
