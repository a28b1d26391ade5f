//! Install-path command implementation.
//!
//! `pyverify install-path <arch> <freethreaded>` checks the 3.13 per-user
//! `Scripts` directory; `pyverify install-path <version> <arch>
//! <freethreaded>` takes the major/minor from `<version>` instead.

use crate::check::{CheckKind, CheckReport, DEFAULT_INSTALL_VERSION};
use crate::cli::args::{reject_misplaced_options, InstallPathArgs};
use crate::error::{Result, VerifyError};
use crate::interpreter::VersionSource;
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// Usage line for the positional form.
pub const INSTALL_PATH_USAGE: &str =
    "Usage: pyverify install-path [<version>] <architecture> <freethreaded>";

/// The install-path command implementation.
pub struct InstallPathCommand<'a> {
    context: &'a CheckContext,
    args: InstallPathArgs,
}

impl<'a> InstallPathCommand<'a> {
    /// Create a new install-path command.
    pub fn new(context: &'a CheckContext, args: InstallPathArgs) -> Self {
        Self { context, args }
    }

    fn check(&self, ui: &mut dyn UserInterface) -> Result<CheckReport> {
        reject_misplaced_options(&self.args.args)?;
        let (source, architecture, freethreaded) = match self.args.args.as_slice() {
            [architecture, freethreaded] => {
                let (major, minor) = DEFAULT_INSTALL_VERSION;
                (VersionSource::Literal { major, minor }, architecture, freethreaded)
            }
            [version, architecture, freethreaded] => {
                (VersionSource::Cli(version.clone()), architecture, freethreaded)
            }
            _ => return Err(VerifyError::usage(INSTALL_PATH_USAGE)),
        };

        self.context.verify_install_path(
            ui,
            CheckKind::InstallPath,
            &source,
            architecture,
            freethreaded,
            false,
        )
    }
}

impl Command for InstallPathCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.check(ui);
        self.context.finish(ui, CheckKind::InstallPath, outcome)
    }
}
