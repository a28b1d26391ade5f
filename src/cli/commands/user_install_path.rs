//! User install-path command implementation.
//!
//! `pyverify user-install-path -arch <arch> -freethreaded <freethreaded>`
//! checks the per-user `Scripts` directory of the interpreter being run.

use crate::check::{CheckKind, CheckReport};
use crate::cli::args::{reject_misplaced_options, UserInstallPathArgs};
use crate::cli::flag_pairs::parse_flag_pairs;
use crate::error::Result;
use crate::interpreter::VersionSource;
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The user-install-path command implementation.
pub struct UserInstallPathCommand<'a> {
    context: &'a CheckContext,
    args: UserInstallPathArgs,
}

impl<'a> UserInstallPathCommand<'a> {
    /// Create a new user-install-path command.
    pub fn new(context: &'a CheckContext, args: UserInstallPathArgs) -> Self {
        Self { context, args }
    }

    fn check(&self, ui: &mut dyn UserInterface) -> Result<CheckReport> {
        reject_misplaced_options(&self.args.args)?;
        let flags = parse_flag_pairs(&self.args.args)?;

        self.context.verify_install_path(
            ui,
            CheckKind::UserInstallPath,
            &VersionSource::Interpreter,
            flags.architecture.as_deref().unwrap_or_default(),
            flags.freethreaded.as_deref().unwrap_or_default(),
            true,
        )
    }
}

impl Command for UserInstallPathCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.check(ui);
        self.context.finish(ui, CheckKind::UserInstallPath, outcome)
    }
}
