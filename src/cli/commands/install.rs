//! Install command implementation.

use tracing::debug;

use crate::error::Result;
use crate::manager::ModuleManager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Installs or updates a single module.
pub struct InstallCommand<'a> {
    manager: &'a ModuleManager,
    module: String,
}

impl<'a> InstallCommand<'a> {
    pub fn new(manager: &'a ModuleManager, module: &str) -> Self {
        Self {
            manager,
            module: module.to_string(),
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!(module = %self.module, "install requested");

        let mut spinner = ui.start_spinner(&format!("Installing {}...", self.module));

        match self.manager.install(&self.module) {
            Ok(report) => {
                let verb = if report.updated { "updated" } else { "installed" };
                spinner.finish_success(&format!("{} {} successfully", self.module, verb));
                ui.success(&format!("{} {} successfully!", self.module, verb));
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", self.module));
                ui.error(&format!("Failed to install {}: {}", self.module, e));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
