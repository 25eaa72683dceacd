//! Package installation.
//!
//! Installed modules are Python checkouts; they are installed in editable
//! mode so they run directly from the cloned source. The build descriptor
//! decides whether a checkout is installable at all: `pyproject.toml` is
//! preferred, `setup.py` is accepted as a legacy fallback.

use std::path::{Path, PathBuf};

use crate::error::{ModlaunchError, Result};

/// Recognized build descriptor inside a module checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildDescriptor {
    /// `pyproject.toml` (preferred).
    Pyproject,
    /// `setup.py` (legacy).
    LegacySetup,
}

impl BuildDescriptor {
    /// Detect the build descriptor in a checkout, preferring `pyproject.toml`.
    pub fn detect(dir: &Path) -> Option<Self> {
        if dir.join("pyproject.toml").is_file() {
            Some(Self::Pyproject)
        } else if dir.join("setup.py").is_file() {
            Some(Self::LegacySetup)
        } else {
            None
        }
    }

    /// File name of the descriptor.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Pyproject => "pyproject.toml",
            Self::LegacySetup => "setup.py",
        }
    }
}

/// Package-installer collaborator seam. Mockable in tests.
pub trait PackageInstaller: Send + Sync {
    /// Install the checkout at `path` in editable mode.
    fn install_editable(&self, module: &str, path: &Path) -> Result<()>;
}

/// Resolve the Python interpreter to use for pip and module launches.
///
/// `MODLAUNCH_PYTHON` overrides the default `python3`.
pub fn python_executable() -> PathBuf {
    std::env::var_os("MODLAUNCH_PYTHON")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("python3"))
}

/// Real installer shelling out to `pip` in the resolved interpreter.
#[derive(Debug)]
pub struct PipInstaller {
    python: PathBuf,
}

impl PipInstaller {
    pub fn new() -> Self {
        Self {
            python: python_executable(),
        }
    }

    /// Use a specific interpreter instead of the resolved default.
    pub fn with_python(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageInstaller for PipInstaller {
    fn install_editable(&self, module: &str, path: &Path) -> Result<()> {
        tracing::debug!("Installing {} in editable mode from {}", module, path.display());

        let output = std::process::Command::new(&self.python)
            .args(["-m", "pip", "install", "-e"])
            .arg(path)
            .output()
            .map_err(|e| ModlaunchError::InstallerFailed {
                module: module.to_string(),
                message: format!("could not run {}: {}", self.python.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // Last lines of pip output carry the actionable message.
            let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
            let message: Vec<&str> = tail.into_iter().rev().collect();
            return Err(ModlaunchError::InstallerFailed {
                module: module.to_string(),
                message: format!(
                    "pip exited with code {:?}: {}",
                    output.status.code(),
                    message.join(" | ")
                ),
            });
        }

        Ok(())
    }
}
