//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pyverify::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("not shown in quiet mode");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, CheckTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain status line.
    fn message(&mut self, msg: &str);

    /// Display a diagnostic line (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display a passing verdict.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display a failing verdict or error. Always shown.
    fn error(&mut self, msg: &str);

    /// Display a usage line. Always shown.
    fn usage(&mut self, usage: &str);

    /// Write raw output regardless of mode (used for JSON reports).
    fn emit(&mut self, text: &str);
}

/// Create the terminal UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
