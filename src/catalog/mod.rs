//! Module catalog: the static list of known modules and their metadata.
//!
//! Loaded once at startup from a packaged default or a user catalog file and
//! treated as immutable for the session.

pub mod builtin;
pub mod loader;
pub mod schema;

use std::path::Path;

pub use builtin::builtin_catalog;
pub use loader::{load_catalog, load_catalog_file};
pub use schema::{Catalog, LaunchStrategy, ModuleDescriptor};

use crate::error::Result;

impl Catalog {
    /// Load the catalog, honoring an optional explicit override path.
    ///
    /// Convenience wrapper over [`loader::load_catalog`].
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        load_catalog(override_path)
    }
}
