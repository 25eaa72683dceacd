//! Command-line interface.
//!
//! Argument parsing lives in [`args`]; the action implementations and the
//! dispatcher live in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Action, Cli};
pub use commands::{Command, CommandDispatcher, CommandResult};
