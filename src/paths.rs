//! Per-user application directories.
//!
//! All filesystem locations used by default live under one per-user data
//! directory. Business logic never reads these directly; the resolved paths
//! are passed in as constructor parameters so tests can inject temporary
//! roots.

use std::path::PathBuf;

/// Per-user data directory for modlaunch (e.g. `~/.local/share/modlaunch`).
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("modlaunch"))
}

/// Default directory holding installed module checkouts.
pub fn default_modules_root() -> Option<PathBuf> {
    data_dir().map(|d| d.join("modules"))
}

/// Location of the user's catalog override file.
pub fn user_catalog_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("modules.json"))
}
