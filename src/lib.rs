//! Modlaunch - catalog-driven launcher for external analysis modules.
//!
//! Modlaunch keeps a small catalog of external analysis modules (each a git
//! repository with a Python entry point), installs them as editable package
//! checkouts under a per-user directory, and launches them as independent
//! processes.
//!
//! # Modules
//!
//! - [`catalog`] - Module catalog loading and validation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manager`] - Module lifecycle: install, update, status, launch
//! - [`paths`] - Per-user application directories
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```no_run
//! use modlaunch::catalog::Catalog;
//! use modlaunch::manager::ModuleManager;
//!
//! let catalog = Catalog::load(None).unwrap();
//! let manager = ModuleManager::new(catalog, "/tmp/modules");
//! for (id, _descriptor) in manager.catalog().iter() {
//!     println!("{}: installed={}", id, manager.is_installed(id));
//! }
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod manager;
pub mod paths;
pub mod ui;

pub use error::{ModlaunchError, Result};
