//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The surface is flag-based:
//! `--list-modules`, `--install MODULE`, `--launch MODULE`, and no
//! arguments opens the interactive session.

use clap::Parser;
use std::path::PathBuf;

/// Modlaunch - catalog-driven launcher for external analysis modules.
#[derive(Debug, Parser)]
#[command(name = "modlaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List all catalog modules and their install status
    #[arg(long)]
    pub list_modules: bool,

    /// Install or update a module
    #[arg(long, value_name = "MODULE", conflicts_with = "list_modules")]
    pub install: Option<String>,

    /// Launch an installed module
    #[arg(
        long,
        value_name = "MODULE",
        conflicts_with_all = ["list_modules", "install"]
    )]
    pub launch: Option<String>,

    /// Path to a catalog file (overrides the packaged default)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Directory where module checkouts are installed
    #[arg(long, value_name = "PATH", env = "MODLAUNCH_MODULES_ROOT")]
    pub modules_root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// The operation selected by the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the catalog with install status.
    List,
    /// Install or update a module.
    Install(String),
    /// Launch an installed module.
    Launch(String),
    /// Open the interactive session.
    Interactive,
}

impl Cli {
    /// Resolve the action from the parsed flags.
    pub fn action(&self) -> Action {
        if self.list_modules {
            Action::List
        } else if let Some(module) = &self.install {
            Action::Install(module.clone())
        } else if let Some(module) = &self.launch {
            Action::Launch(module.clone())
        } else {
            Action::Interactive
        }
    }
}
