//! Git repository fetching.
//!
//! Clones a module repository at a named branch into a destination directory
//! and reads the checked-out revision for display.

use std::path::Path;

use crate::error::{ModlaunchError, Result};

/// Version-control collaborator seam. Mockable in tests.
pub trait Vcs: Send + Sync {
    /// Clone `url` at `branch` into `dest`. `dest` must not exist yet.
    fn clone_into(&self, url: &str, branch: &str, dest: &Path) -> Result<()>;
}

/// Real git client shelling out to the `git` binary.
#[derive(Debug, Default)]
pub struct GitClient;

impl GitClient {
    pub fn new() -> Self {
        Self
    }

    /// Current commit SHA of a checkout.
    pub fn head_sha(path: &Path) -> Result<String> {
        let output = std::process::Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(path)
            .output()?;

        if !output.status.success() {
            return Err(ModlaunchError::Other(anyhow::anyhow!(
                "git rev-parse failed in {}",
                path.display()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for GitClient {
    fn clone_into(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let output = std::process::Command::new("git")
            .args(["clone", "--depth", "1", "--branch", branch])
            .arg(url)
            .arg(dest)
            .output()?;

        if !output.status.success() {
            return Err(ModlaunchError::CloneFailed {
                url: url.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
