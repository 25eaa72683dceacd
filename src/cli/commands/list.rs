//! List command implementation.

use crate::error::Result;
use crate::manager::ModuleManager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints every catalog module with its install status.
pub struct ListCommand<'a> {
    manager: &'a ModuleManager,
}

impl<'a> ListCommand<'a> {
    pub fn new(manager: &'a ModuleManager) -> Self {
        Self { manager }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("Available modules:");
        ui.message(&"=".repeat(50));

        for (id, descriptor) in self.manager.catalog().iter() {
            let status = if self.manager.is_installed(id) {
                match self.manager.installed_revision(id) {
                    Some(rev) => format!("✓ Installed ({})", rev),
                    None => "✓ Installed".to_string(),
                }
            } else {
                "✗ Not Installed".to_string()
            };

            ui.message(&format!("  {} {} - {}", descriptor.icon, id, status));
            if !descriptor.description.is_empty() {
                ui.message(&format!("      {}", descriptor.description));
            }
            ui.message(&format!(
                "      {} @ {} (version: {})",
                descriptor.url, descriptor.branch, descriptor.version
            ));
        }

        Ok(CommandResult::success())
    }
}
