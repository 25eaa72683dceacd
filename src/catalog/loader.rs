//! Catalog discovery and loading.
//!
//! The catalog is loaded once at startup, in priority order:
//!
//! 1. An explicit path (`--catalog`) — missing or malformed files are errors.
//! 2. The user catalog at `<data-dir>/modlaunch/modules.json`, if present.
//! 3. The packaged default, embedded at compile time.
//! 4. The hardcoded builtin fallback if the packaged default is unreadable.

use std::fs;
use std::path::Path;

use crate::error::{ModlaunchError, Result};
use crate::paths;

use super::builtin::builtin_catalog;
use super::schema::Catalog;

/// Packaged default catalog, embedded at compile time.
const PACKAGED_CATALOG: &str = include_str!("../../config/modules.json");

/// Load the catalog, honoring an optional explicit override path.
pub fn load_catalog(override_path: Option<&Path>) -> Result<Catalog> {
    if let Some(path) = override_path {
        return load_catalog_file(path);
    }

    if let Some(user_path) = paths::user_catalog_path() {
        if user_path.exists() {
            tracing::debug!("Loading user catalog from {}", user_path.display());
            return load_catalog_file(&user_path);
        }
    }

    match parse_catalog(PACKAGED_CATALOG) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            tracing::warn!("Packaged catalog unreadable ({}), using builtin fallback", e);
            Ok(builtin_catalog())
        }
    }
}

/// Load and validate a single catalog file.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParse` if the JSON is invalid.
/// Returns `CatalogValidation` if an entry violates catalog invariants.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ModlaunchError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ModlaunchError::Io(e)
        }
    })?;

    let catalog: Catalog =
        serde_json::from_str(&content).map_err(|e| ModlaunchError::CatalogParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    catalog.validate()?;
    Ok(catalog)
}

fn parse_catalog(content: &str) -> Result<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(content).map_err(|e| ModlaunchError::CatalogValidation {
            message: e.to_string(),
        })?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn packaged_catalog_parses_and_validates() {
        let catalog = parse_catalog(PACKAGED_CATALOG).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("Ageing Analysis"));
    }

    #[test]
    fn explicit_path_loads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modules.json");
        fs::write(
            &path,
            r#"{
                "Demo": {
                    "url": "https://example.test/demo.git",
                    "branch": "main",
                    "entry_point": "demo.main"
                }
            }"#,
        )
        .unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Demo"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");

        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(matches!(err, ModlaunchError::CatalogNotFound { .. }));
    }

    #[test]
    fn malformed_explicit_catalog_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modules.json");
        fs::write(&path, "not json").unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        assert!(matches!(err, ModlaunchError::CatalogParse { .. }));
    }

    #[test]
    fn invalid_entry_in_explicit_catalog_fails_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modules.json");
        fs::write(
            &path,
            r#"{
                "Demo": {
                    "url": "",
                    "branch": "main",
                    "entry_point": "demo.main"
                }
            }"#,
        )
        .unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        assert!(matches!(err, ModlaunchError::CatalogValidation { .. }));
    }

    #[test]
    fn empty_explicit_catalog_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modules.json");
        fs::write(&path, "{}").unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert!(catalog.is_empty());
    }
}
