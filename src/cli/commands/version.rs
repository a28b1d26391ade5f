//! Version command implementation.
//!
//! The `pyverify version <version>` command checks the interpreter version.

use crate::check::{compare_version, CheckKind, CheckReport, VersionSpec};
use crate::cli::args::{reject_misplaced_options, VersionArgs};
use crate::error::{Result, VerifyError};
use crate::ui::UserInterface;

use super::context::CheckContext;
use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand<'a> {
    context: &'a CheckContext,
    args: VersionArgs,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command.
    pub fn new(context: &'a CheckContext, args: VersionArgs) -> Self {
        Self { context, args }
    }

    fn check(&self, ui: &mut dyn UserInterface) -> Result<CheckReport> {
        reject_misplaced_options(&self.args.args)?;
        let [expected] = self.args.args.as_slice() else {
            return Err(VerifyError::argument_count());
        };
        // Reject malformed expectations before touching the interpreter.
        VersionSpec::parse(expected)?;

        let actual = self.context.probe().probe()?;
        ui.detail(&format!(
            "Interpreter {} reports {}",
            self.context.probe().describe(),
            actual
        ));

        let matched = compare_version(expected, &actual)?;
        let message = matched.message();
        ui.success(&message);

        Ok(CheckReport::pass(CheckKind::Version, message)
            .with_expected(matched.expected)
            .with_actual(matched.actual))
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.check(ui);
        self.context.finish(ui, CheckKind::Version, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::InterpreterVersion;
    use crate::environment::CheckEnvironment;
    use crate::interpreter::{CommandProbe, StaticProbe};
    use crate::ui::MockUI;

    fn context(version: InterpreterVersion) -> CheckContext {
        CheckContext::new(CheckEnvironment::default(), Box::new(StaticProbe::new(version)))
    }

    fn run(ctx: &CheckContext, args: &[&str]) -> (CommandResult, MockUI) {
        let args = VersionArgs {
            args: args.iter().map(|s| s.to_string()).collect(),
        };
        let mut ui = MockUI::new();
        let result = VersionCommand::new(ctx, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn major_minor_match() {
        let ctx = context(InterpreterVersion::new(3, 13, 1));
        let (result, ui) = run(&ctx, &["3.13"]);
        assert!(result.success);
        assert!(ui.has_success("Correct version of Python 3.13 detected"));
    }

    #[test]
    fn micro_match() {
        let ctx = context(InterpreterVersion::new(3, 13, 1));
        let (result, _) = run(&ctx, &["3.13.1"]);
        assert!(result.success);
    }

    #[test]
    fn mismatch_reports_both_versions() {
        let ctx = context(InterpreterVersion::new(3, 13, 1));
        let (result, ui) = run(&ctx, &["3.12"]);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Expected: 3.12"));
        assert!(ui.has_error("Actual: 3.13"));
    }

    #[test]
    fn wrong_component_count_fails() {
        let ctx = context(InterpreterVersion::new(3, 13, 1));
        for input in ["3", "3.13.1.0", ""] {
            let (result, ui) = run(&ctx, &[input]);
            assert_eq!(result.exit_code, 1, "{input:?}");
            assert!(ui.has_error("Incorrect number of arguments supplied"));
        }
    }

    #[test]
    fn wrong_token_count_fails() {
        let ctx = context(InterpreterVersion::new(3, 13, 1));
        for args in [&[][..], &["3.13", "3.12"][..]] {
            let (result, ui) = run(&ctx, args);
            assert_eq!(result.exit_code, 1);
            assert!(ui.has_error("Incorrect number of arguments supplied"));
            assert!(ui.usages().is_empty());
        }
    }

    #[test]
    fn malformed_expectation_does_not_probe() {
        let ctx = CheckContext::new(
            CheckEnvironment::default(),
            Box::new(CommandProbe::new("pyverify-no-such-interpreter")),
        );
        let (result, ui) = run(&ctx, &["3"]);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Incorrect number of arguments supplied"));
    }

    #[test]
    fn probe_failure_is_reported() {
        let ctx = CheckContext::new(
            CheckEnvironment::default(),
            Box::new(CommandProbe::new("pyverify-no-such-interpreter")),
        );
        let (result, ui) = run(&ctx, &["3.13"]);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("pyverify-no-such-interpreter"));
    }

    #[test]
    fn freethreaded_expectation() {
        let ctx = context(InterpreterVersion::new(3, 13, 0).freethreaded(true));
        let (result, _) = run(&ctx, &["3.13t"]);
        assert!(result.success);

        let ctx = context(InterpreterVersion::new(3, 13, 0));
        let (result, _) = run(&ctx, &["3.13t"]);
        assert_eq!(result.exit_code, 1);
    }
}
