//! Path utilities for configured database locations.

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve a user supplied database name: absolute (or `~`) paths are kept,
/// bare names land in `base_dir`.
pub fn resolve_db_path(name: &str, base_dir: &Path) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base_dir.join(p) }
}
