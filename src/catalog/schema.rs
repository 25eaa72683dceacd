//! Catalog data model.
//!
//! The catalog is a JSON mapping of module id to [`ModuleDescriptor`]. Ids
//! are unique by construction (map keys) and double as both display name and
//! on-disk directory name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModlaunchError, Result};

/// How an installed module's entry point is started.
///
/// Resolved once from the descriptor, never by runtime trial-and-error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchStrategy {
    /// Run the entry point as a module: `python -m <entry_point>`.
    #[default]
    EntryModule,
    /// Import the entry point and call its `main()` in a fresh process.
    GeneratedMain,
}

/// One catalog entry: where a module lives and how to run it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Git repository to clone.
    pub url: String,

    /// Branch (or tag) to check out.
    pub branch: String,

    /// Display-only description.
    #[serde(default)]
    pub description: String,

    /// Dotted path of the runnable unit inside the installed module.
    pub entry_point: String,

    /// Declared version tag; "latest" is a valid sentinel.
    #[serde(default = "default_version")]
    pub version: String,

    /// Display-only icon.
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Launch strategy for the entry point.
    #[serde(default)]
    pub launch: LaunchStrategy,
}

fn default_version() -> String {
    "latest".to_string()
}

fn default_icon() -> String {
    "🔧".to_string()
}

/// The loaded module catalog. Read-only after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    modules: BTreeMap<String, ModuleDescriptor>,
}

impl Catalog {
    /// Build a catalog from an id → descriptor mapping.
    pub fn from_modules(modules: BTreeMap<String, ModuleDescriptor>) -> Self {
        Self { modules }
    }

    /// Look up a module by id.
    pub fn get(&self, id: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(id)
    }

    /// Check whether an id exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    /// Iterate entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleDescriptor)> {
        self.modules.iter()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Validate catalog invariants: non-empty ids, urls, and branches.
    pub fn validate(&self) -> Result<()> {
        for (id, descriptor) in &self.modules {
            if id.trim().is_empty() {
                return Err(ModlaunchError::CatalogValidation {
                    message: "module id must not be empty".to_string(),
                });
            }
            // Ids double as directory names under modules_root.
            if id.contains(['/', '\\']) || id == "." || id == ".." {
                return Err(ModlaunchError::CatalogValidation {
                    message: format!("module id '{}' is not a valid directory name", id),
                });
            }
            if descriptor.url.trim().is_empty() {
                return Err(ModlaunchError::CatalogValidation {
                    message: format!("module '{}' has an empty repository url", id),
                });
            }
            if descriptor.branch.trim().is_empty() {
                return Err(ModlaunchError::CatalogValidation {
                    message: format!("module '{}' has an empty branch", id),
                });
            }
        }
        Ok(())
    }
}
