//! Module launching.
//!
//! Modules start as independent OS processes so a launched module can open
//! its own GUI surface or block without affecting the launcher. The child is
//! detached: only spawn success or failure is observed, never exit status.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::LaunchStrategy;
use crate::error::{ModlaunchError, Result};

use super::installer::python_executable;

/// Entry points are dotted identifier paths (`pkg.sub.main`). Anything else
/// is rejected before a command line is built from it.
fn entry_point_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
    })
}

/// Validate an entry point against the dotted-identifier pattern.
pub fn validate_entry_point(module: &str, entry_point: &str) -> Result<()> {
    if entry_point_pattern().is_match(entry_point) {
        Ok(())
    } else {
        Err(ModlaunchError::LaunchFailed {
            module: module.to_string(),
            message: format!("invalid entry point '{}'", entry_point),
        })
    }
}

/// What to spawn for a module. Built by the manager after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Validated dotted entry point.
    pub entry_point: String,
    /// Strategy resolved from the descriptor.
    pub strategy: LaunchStrategy,
}

/// Process-spawn collaborator seam. Mockable in tests.
pub trait ProcessLauncher: Send + Sync {
    /// Spawn the module process. Fire-and-forget.
    fn spawn(&self, module: &str, spec: &LaunchSpec) -> Result<()>;
}

/// Real launcher spawning the resolved Python interpreter.
#[derive(Debug)]
pub struct PythonLauncher {
    python: PathBuf,
}

impl PythonLauncher {
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

impl Default for PythonLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for PythonLauncher {
    fn spawn(&self, module: &str, spec: &LaunchSpec) -> Result<()> {
        let mut cmd = Command::new(&self.python);
        match spec.strategy {
            LaunchStrategy::EntryModule => {
                cmd.args(["-m", &spec.entry_point]);
            }
            LaunchStrategy::GeneratedMain => {
                // Safe: the entry point is a validated dotted identifier path.
                cmd.arg("-c").arg(format!(
                    "import {ep}; {ep}.main()",
                    ep = spec.entry_point
                ));
            }
        }

        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ModlaunchError::LaunchFailed {
                module: module.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!("Launched {} (pid {})", module, child.id());
        drop(child);
        Ok(())
    }
}
