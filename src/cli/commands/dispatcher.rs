//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI actions

use anyhow::anyhow;

use crate::catalog::Catalog;
use crate::cli::args::{Action, Cli};
use crate::error::{ModlaunchError, Result};
use crate::manager::ModuleManager;
use crate::paths;
use crate::ui::UserInterface;

use super::install::InstallCommand;
use super::interactive::InteractiveCommand;
use super::launch::LaunchCommand;
use super::list::ListCommand;

/// Trait for command implementations.
///
/// Each CLI action implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI actions to their implementations.
pub struct CommandDispatcher {
    manager: ModuleManager,
}

impl CommandDispatcher {
    /// Build a dispatcher from parsed CLI flags.
    ///
    /// Loads the catalog (honoring `--catalog`) and resolves the modules
    /// root from `--modules-root` / `MODLAUNCH_MODULES_ROOT`, falling back
    /// to the per-user data directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let catalog = Catalog::load(cli.catalog.as_deref())?;
        let modules_root = match &cli.modules_root {
            Some(root) => root.clone(),
            None => paths::default_modules_root().ok_or_else(|| {
                ModlaunchError::Other(anyhow!(
                    "could not determine a per-user data directory; pass --modules-root"
                ))
            })?,
        };
        Ok(Self::new(ModuleManager::new(catalog, modules_root)))
    }

    /// Create a dispatcher around an existing manager.
    pub fn new(manager: ModuleManager) -> Self {
        Self { manager }
    }

    /// The manager this dispatcher routes commands through.
    pub fn manager(&self) -> &ModuleManager {
        &self.manager
    }

    /// Dispatch and execute the action selected by the CLI flags.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match cli.action() {
            Action::List => ListCommand::new(&self.manager).execute(ui),
            Action::Install(module) => InstallCommand::new(&self.manager, &module).execute(ui),
            Action::Launch(module) => LaunchCommand::new(&self.manager, &module).execute(ui),
            Action::Interactive => InteractiveCommand::new(&self.manager).execute(ui),
        }
    }
}

/// Create a dispatcher from CLI flags.
///
/// Convenience wrapper used by `main`.
pub fn create_dispatcher(cli: &Cli) -> Result<CommandDispatcher> {
    CommandDispatcher::from_cli(cli)
}
