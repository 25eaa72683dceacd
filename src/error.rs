//! Error types for modlaunch operations.
//!
//! This module defines [`ModlaunchError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ModlaunchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ModlaunchError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modlaunch operations.
#[derive(Debug, Error)]
pub enum ModlaunchError {
    /// Catalog file not found at expected location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParse { path: PathBuf, message: String },

    /// Invalid catalog structure or values.
    #[error("Invalid catalog: {message}")]
    CatalogValidation { message: String },

    /// Referenced module does not exist in the catalog.
    #[error("Unknown module: {module}")]
    UnknownModule { module: String },

    /// Repository fetch failed (network, auth, bad branch).
    #[error("Failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Cloned tree has no recognized build descriptor.
    #[error("Module '{module}' has neither pyproject.toml nor setup.py")]
    MissingBuildDescriptor { module: String },

    /// Package installer exited non-zero.
    #[error("Installer failed for '{module}': {message}")]
    InstallerFailed { module: String, message: String },

    /// Launch was requested for a module that is not installed.
    #[error("Module '{module}' is not installed")]
    ModuleNotInstalled { module: String },

    /// Launching the module process failed.
    #[error("Failed to launch '{module}': {message}")]
    LaunchFailed { module: String, message: String },

    /// An install or update of the same module is already running.
    #[error("An operation is already in progress for '{module}'")]
    OperationInFlight { module: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for modlaunch operations.
pub type Result<T> = std::result::Result<T, ModlaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = ModlaunchError::CatalogNotFound {
            path: PathBuf::from("/foo/modules.json"),
        };
        assert!(err.to_string().contains("/foo/modules.json"));
    }

    #[test]
    fn catalog_parse_displays_path_and_message() {
        let err = ModlaunchError::CatalogParse {
            path: PathBuf::from("/modules.json"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/modules.json"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_module_displays_name() {
        let err = ModlaunchError::UnknownModule {
            module: "Nonexistent".into(),
        };
        assert!(err.to_string().contains("Nonexistent"));
    }

    #[test]
    fn clone_failed_displays_url_and_message() {
        let err = ModlaunchError::CloneFailed {
            url: "https://example.test/demo.git".into(),
            message: "could not resolve host".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.test/demo.git"));
        assert!(msg.contains("could not resolve host"));
    }

    #[test]
    fn missing_build_descriptor_names_both_files() {
        let err = ModlaunchError::MissingBuildDescriptor {
            module: "Demo".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Demo"));
        assert!(msg.contains("pyproject.toml"));
        assert!(msg.contains("setup.py"));
    }

    #[test]
    fn installer_failed_displays_module_and_message() {
        let err = ModlaunchError::InstallerFailed {
            module: "Demo".into(),
            message: "pip exited with code 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Demo"));
        assert!(msg.contains("pip exited with code 1"));
    }

    #[test]
    fn module_not_installed_displays_module() {
        let err = ModlaunchError::ModuleNotInstalled {
            module: "Demo".into(),
        };
        assert!(err.to_string().contains("not installed"));
    }

    #[test]
    fn operation_in_flight_displays_module() {
        let err = ModlaunchError::OperationInFlight {
            module: "Demo".into(),
        };
        assert!(err.to_string().contains("Demo"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ModlaunchError = io_err.into();
        assert!(matches!(err, ModlaunchError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ModlaunchError::CatalogValidation {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
