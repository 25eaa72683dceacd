//! Non-interactive UI for CI/headless environments.
//!
//! Prints plain lines without spinners or colors and answers prompts with
//! their defaults; prompts without a default are an error.

use anyhow::anyhow;

use crate::error::{ModlaunchError, Result};

use super::{
    OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// UI implementation for non-interactive environments.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

/// Spinner stand-in that prints the message once.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match (&prompt.prompt_type, &prompt.default) {
            (PromptType::Confirm, default) => {
                let value = default
                    .as_ref()
                    .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
                    .unwrap_or(true);
                Ok(PromptResult::Bool(value))
            }
            (PromptType::Select { .. }, Some(default)) => {
                Ok(PromptResult::String(default.clone()))
            }
            (PromptType::Select { .. }, None) => Err(ModlaunchError::Other(anyhow!(
                "prompt '{}' requires a terminal",
                prompt.key
            ))),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(LineSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
