//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the
//! flag-selected action to its implementation. This allows:
//! - Single binary with flag-style actions (`--list-modules`, `--install`)
//! - Shared catalog and manager initialization
//! - Consistent exit-code handling

pub mod dispatcher;
pub mod install;
pub mod interactive;
pub mod launch;
pub mod list;

pub use dispatcher::{create_dispatcher, Command, CommandDispatcher, CommandResult};
