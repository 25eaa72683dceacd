//! Interactive session.
//!
//! Shown when modlaunch is started without action flags. Renders a card
//! per catalog module and loops on a select prompt until the user quits.
//! Installs run on a worker thread so the spinner stays responsive;
//! launches are synchronous because they only spawn and detach.

use anyhow::anyhow;
use tracing::debug;

use crate::error::{ModlaunchError, Result};
use crate::manager::ModuleManager;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The menu session started when no action flags are given.
pub struct InteractiveCommand<'a> {
    manager: &'a ModuleManager,
}

impl<'a> InteractiveCommand<'a> {
    pub fn new(manager: &'a ModuleManager) -> Self {
        Self { manager }
    }

    fn render_catalog(&self, ui: &mut dyn UserInterface) {
        ui.message(&"=".repeat(50));
        if self.manager.catalog().is_empty() {
            ui.message("  (no modules in catalog)");
        }
        for (id, descriptor) in self.manager.catalog().iter() {
            let status = if self.manager.is_installed(id) {
                match self.manager.installed_revision(id) {
                    Some(rev) => format!("✓ Installed ({})", rev),
                    None => "✓ Installed".to_string(),
                }
            } else {
                "✗ Not Installed".to_string()
            };
            ui.message(&format!(
                "  {} {} (version: {})",
                descriptor.icon, id, descriptor.version
            ));
            if !descriptor.description.is_empty() {
                ui.message(&format!("      {}", descriptor.description));
            }
            ui.message(&format!("      {}", status));
        }
        ui.message(&"=".repeat(50));
    }

    fn build_options(&self) -> Vec<PromptOption> {
        let mut options = Vec::new();
        for (id, descriptor) in self.manager.catalog().iter() {
            if self.manager.is_installed(id) {
                options.push(PromptOption {
                    label: format!("Launch {} {}", descriptor.icon, id),
                    value: format!("launch:{}", id),
                });
                options.push(PromptOption {
                    label: format!("Update {}", id),
                    value: format!("install:{}", id),
                });
            } else {
                options.push(PromptOption {
                    label: format!("Install {} {}", descriptor.icon, id),
                    value: format!("install:{}", id),
                });
            }
        }
        options.push(PromptOption {
            label: "Refresh".to_string(),
            value: "refresh".to_string(),
        });
        options.push(PromptOption {
            label: "Quit".to_string(),
            value: "quit".to_string(),
        });
        options
    }

    fn install_module(&self, ui: &mut dyn UserInterface, id: &str) {
        ui.status(&format!("Installing {}...", id));
        let mut spinner = ui.start_spinner(&format!("Installing {}...", id));

        // Keep the UI thread free while git and pip run.
        let result = std::thread::scope(|scope| {
            scope
                .spawn(|| self.manager.install(id))
                .join()
                .unwrap_or_else(|_| {
                    Err(ModlaunchError::Other(anyhow!("install worker panicked")))
                })
        });

        match result {
            Ok(report) => {
                let verb = if report.updated { "updated" } else { "installed" };
                spinner.finish_success(&format!("{} {} successfully", id, verb));
                ui.status(&format!("{} {} successfully", id, verb));
            }
            Err(e) => {
                spinner.finish_error(&format!("Failed to install {}", id));
                ui.error(&format!("Failed to install {}: {}", id, e));
                ui.status("Ready");
            }
        }
    }

    fn launch_module(&self, ui: &mut dyn UserInterface, id: &str) {
        ui.status(&format!("Launching {}...", id));
        match self.manager.launch(id) {
            Ok(()) => ui.status(&format!("{} launched successfully", id)),
            Err(e) => {
                ui.error(&format!("Failed to launch {}: {}", id, e));
                ui.status("Ready");
            }
        }
    }
}

impl Command for InteractiveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("interactive session requires a terminal; try --list-modules");
            return Ok(CommandResult::failure(2));
        }

        ui.show_header("FIT Module Launcher");
        ui.status("Ready");

        loop {
            self.render_catalog(ui);

            let prompt = Prompt {
                key: "action".to_string(),
                question: "Select an action".to_string(),
                prompt_type: PromptType::Select {
                    options: self.build_options(),
                },
                default: None,
            };

            let choice = ui.prompt(&prompt)?.as_string();
            debug!(choice = %choice, "interactive action selected");

            match choice.split_once(':') {
                Some(("install", id)) => self.install_module(ui, id),
                Some(("launch", id)) => self.launch_module(ui, id),
                _ if choice == "refresh" => continue,
                _ if choice == "quit" => break,
                _ => ui.warning(&format!("Unknown action: {}", choice)),
            }
        }

        Ok(CommandResult::success())
    }
}
