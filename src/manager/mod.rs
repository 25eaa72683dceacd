//! Module lifecycle management.
//!
//! [`ModuleManager`] is the sole mutator of the on-disk modules tree. It
//! installs modules by cloning their repository into a staging directory,
//! swapping the staged checkout into place, and running an editable package
//! install; it answers install-status queries with a dynamic filesystem
//! check; and it launches installed modules as detached processes.
//!
//! Install and update are the same operation: any existing checkout is
//! replaced. The swap happens only after a complete clone, so a failed
//! update keeps the previous checkout on disk up to the swap point.

pub mod git;
pub mod installer;
pub mod launcher;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::catalog::Catalog;
use crate::error::{ModlaunchError, Result};

pub use git::{GitClient, Vcs};
pub use installer::{BuildDescriptor, PackageInstaller, PipInstaller};
pub use launcher::{LaunchSpec, ProcessLauncher, PythonLauncher};

/// Outcome of a successful install or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Module id.
    pub module: String,
    /// True when an installed checkout was replaced (an update).
    pub updated: bool,
    /// Build descriptor found in the checkout.
    pub descriptor: BuildDescriptor,
}

/// Manages installation and execution of external modules.
pub struct ModuleManager {
    catalog: Catalog,
    modules_root: PathBuf,
    vcs: Box<dyn Vcs>,
    installer: Box<dyn PackageInstaller>,
    launcher: Box<dyn ProcessLauncher>,
    in_flight: Mutex<HashSet<String>>,
}

/// RAII guard marking a module id as having an operation in flight.
struct OperationGuard<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}

impl ModuleManager {
    /// Create a manager with the production collaborators.
    pub fn new(catalog: Catalog, modules_root: impl Into<PathBuf>) -> Self {
        Self::with_collaborators(
            catalog,
            modules_root,
            Box::new(GitClient::new()),
            Box::new(PipInstaller::new()),
            Box::new(PythonLauncher::new()),
        )
    }

    /// Create a manager with injected collaborators (used in tests).
    pub fn with_collaborators(
        catalog: Catalog,
        modules_root: impl Into<PathBuf>,
        vcs: Box<dyn Vcs>,
        installer: Box<dyn PackageInstaller>,
        launcher: Box<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            catalog,
            modules_root: modules_root.into(),
            vcs,
            installer,
            launcher,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Root directory of installed module checkouts.
    pub fn modules_root(&self) -> &Path {
        &self.modules_root
    }

    /// On-disk directory for a module id.
    pub fn module_dir(&self, id: &str) -> PathBuf {
        self.modules_root.join(id)
    }

    /// Install or update a module.
    ///
    /// Clones the repository at the configured branch into a staging
    /// directory under `modules_root`, checks for a recognized build
    /// descriptor, swaps the checkout into `modules_root/<id>`, and runs the
    /// package installer in editable mode. On installer failure the module
    /// directory is removed so [`is_installed`](Self::is_installed) stays
    /// false.
    pub fn install(&self, id: &str) -> Result<InstallReport> {
        let descriptor = self
            .catalog
            .get(id)
            .ok_or_else(|| ModlaunchError::UnknownModule {
                module: id.to_string(),
            })?;

        let _guard = self.begin_operation(id)?;
        let was_installed = self.is_installed(id);

        tracing::info!(
            "{} {} from {}@{}",
            if was_installed { "Updating" } else { "Installing" },
            id,
            descriptor.url,
            descriptor.branch
        );

        std::fs::create_dir_all(&self.modules_root)?;

        // Staging directory on the same filesystem as the final location so
        // the swap is a rename. Cleaned up automatically on failure.
        let staging = tempfile::Builder::new()
            .prefix(".staging-")
            .tempdir_in(&self.modules_root)?;
        let checkout = staging.path().join("checkout");

        self.vcs
            .clone_into(&descriptor.url, &descriptor.branch, &checkout)?;

        let build = BuildDescriptor::detect(&checkout).ok_or_else(|| {
            ModlaunchError::MissingBuildDescriptor {
                module: id.to_string(),
            }
        })?;
        if build == BuildDescriptor::LegacySetup {
            tracing::warn!("{} uses setup.py (pyproject.toml preferred)", id);
        }

        let module_dir = self.module_dir(id);
        if module_dir.exists() {
            std::fs::remove_dir_all(&module_dir)?;
        }
        std::fs::rename(&checkout, &module_dir)?;

        if let Err(e) = self.installer.install_editable(id, &module_dir) {
            // A checkout that pip rejected must not read as installed.
            let _ = std::fs::remove_dir_all(&module_dir);
            return Err(e);
        }

        Ok(InstallReport {
            module: id.to_string(),
            updated: was_installed,
            descriptor: build,
        })
    }

    /// Check whether a module is installed.
    ///
    /// Dynamic check: the id is in the catalog, its directory exists, a
    /// build descriptor is present, and the entry point is usable. Never
    /// fails; returns false on any internal error.
    pub fn is_installed(&self, id: &str) -> bool {
        let Some(descriptor) = self.catalog.get(id) else {
            return false;
        };

        let module_dir = self.module_dir(id);
        if !module_dir.is_dir() {
            return false;
        }

        if BuildDescriptor::detect(&module_dir).is_none() {
            return false;
        }

        launcher::validate_entry_point(id, &descriptor.entry_point).is_ok()
    }

    /// Launch an installed module as a detached process.
    pub fn launch(&self, id: &str) -> Result<()> {
        let Some(descriptor) = self.catalog.get(id) else {
            return Err(ModlaunchError::ModuleNotInstalled {
                module: id.to_string(),
            });
        };

        if !self.is_installed(id) {
            return Err(ModlaunchError::ModuleNotInstalled {
                module: id.to_string(),
            });
        }

        launcher::validate_entry_point(id, &descriptor.entry_point)?;

        let spec = LaunchSpec {
            entry_point: descriptor.entry_point.clone(),
            strategy: descriptor.launch,
        };
        self.launcher.spawn(id, &spec)
    }

    /// Short commit sha of the installed checkout, for display.
    pub fn installed_revision(&self, id: &str) -> Option<String> {
        if !self.is_installed(id) {
            return None;
        }
        GitClient::head_sha(&self.module_dir(id))
            .ok()
            .map(|sha| sha.chars().take(7).collect())
    }

    /// Mark an operation as in flight for `id`.
    fn begin_operation(&self, id: &str) -> Result<OperationGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(id.to_string()) {
            return Err(ModlaunchError::OperationInFlight {
                module: id.to_string(),
            });
        }
        Ok(OperationGuard {
            in_flight: &self.in_flight,
            id: id.to_string(),
        })
    }
}
