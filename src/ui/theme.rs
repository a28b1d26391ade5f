//! Visual theme and styling.

use console::Style;

/// pyverify's visual theme.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for secondary detail (dim).
    pub dim: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
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

    /// Format a dim detail line.
    pub fn format_detail(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("  {}", msg)))
    }
}

/// Check if colors should be used.
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
        let msg = CheckTheme::plain().format_success("Correct path present in PATH");
        assert_eq!(msg, "✓ Correct path present in PATH");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = CheckTheme::plain().format_warning("No single PATH entry matches");
        assert_eq!(msg, "⚠ No single PATH entry matches");
    }

    #[test]
    fn theme_formats_error() {
        let msg = CheckTheme::plain().format_error("Expected path not found in PATH");
        assert_eq!(msg, "✗ Expected path not found in PATH");
    }

    #[test]
    fn theme_formats_detail() {
        let msg = CheckTheme::plain().format_detail("C:\\tools");
        assert_eq!(msg, "  C:\\tools");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let msg = CheckTheme::new().format_success("ok");
        assert!(msg.contains("ok"));
    }
}
