//! Visual theme and styling.

use console::Style;

/// Modlaunch's visual theme.
#[derive(Debug, Clone)]
pub struct ModlaunchTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for the installed status marker (green).
    pub installed: Style,
    /// Style for the not-installed status marker (red).
    pub not_installed: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ModlaunchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ModlaunchTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            installed: Style::new().green(),
            not_installed: Style::new().red(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            installed: Style::new(),
            not_installed: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🚀"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a module install-status marker.
    pub fn format_install_status(&self, installed: bool) -> String {
        if installed {
            format!("{}", self.installed.apply_to("✓ Installed"))
        } else {
            format!("{}", self.not_installed.apply_to("✗ Not Installed"))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ModlaunchTheme::plain();
        let msg = theme.format_success("Demo installed successfully!");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Demo"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = ModlaunchTheme::plain();
        let msg = theme.format_error("Failed to install Demo");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Demo"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = ModlaunchTheme::plain();
        let msg = theme.format_header("modlaunch");
        assert!(msg.contains("modlaunch"));
    }

    #[test]
    fn theme_formats_install_status() {
        let theme = ModlaunchTheme::plain();
        assert!(theme.format_install_status(true).contains("✓ Installed"));
        assert!(theme
            .format_install_status(false)
            .contains("✗ Not Installed"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ModlaunchTheme::default();
        let new = ModlaunchTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
