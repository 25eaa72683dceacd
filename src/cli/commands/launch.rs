//! Launch command implementation.

use tracing::debug;

use crate::error::Result;
use crate::manager::ModuleManager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Launches an installed module.
pub struct LaunchCommand<'a> {
    manager: &'a ModuleManager,
    module: String,
}

impl<'a> LaunchCommand<'a> {
    pub fn new(manager: &'a ModuleManager, module: &str) -> Self {
        Self {
            manager,
            module: module.to_string(),
        }
    }
}

impl Command for LaunchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!(module = %self.module, "launch requested");
        ui.status(&format!("Launching {}...", self.module));

        match self.manager.launch(&self.module) {
            Ok(()) => {
                ui.success(&format!("{} launched successfully!", self.module));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&format!("Failed to launch {}: {}", self.module, e));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ModuleDescriptor};
    use crate::ui::MockUI;
    use std::collections::BTreeMap;

    fn catalog_with_demo() -> Catalog {
        let mut modules = BTreeMap::new();
        modules.insert(
            "Demo".to_string(),
            ModuleDescriptor {
                url: "https://example.com/demo.git".to_string(),
                branch: "main".to_string(),
                description: String::new(),
                entry_point: "demo.main".to_string(),
                version: "latest".to_string(),
                icon: "🔧".to_string(),
                launch: Default::default(),
            },
        );
        Catalog::from_modules(modules)
    }

    #[test]
    fn launch_not_installed_module_fails_with_exit_1() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ModuleManager::new(catalog_with_demo(), dir.path());
        let mut ui = MockUI::new();

        let result = LaunchCommand::new(&manager, "Demo")
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to launch Demo"));
        assert!(ui.has_error("not installed"));
    }

    #[test]
    fn launch_unknown_module_fails_with_exit_1() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ModuleManager::new(catalog_with_demo(), dir.path());
        let mut ui = MockUI::new();

        let result = LaunchCommand::new(&manager, "Other")
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}
