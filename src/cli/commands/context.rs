//! Shared state and reporting for the check commands.

use anyhow::Context as _;

use crate::check::{
    check_path_membership, matching_entries, parse_freethreaded, Architecture, CheckKind,
    CheckReport, InstallPathRequest, PathBuilder,
};
use crate::cli::args::Cli;
use crate::environment::CheckEnvironment;
use crate::error::{Result, VerifyError};
use crate::interpreter::{CommandProbe, InterpreterProbe, StaticProbe, VersionSource};
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

const PATH_PRESENT: &str = "Correct path present in PATH";
const PATH_MISSING: &str = "Expected path not found in PATH";
const PATH_SPANS_ENTRIES: &str = "Expected path only matches across PATH entries";

/// Everything a check needs besides its own operands.
pub struct CheckContext {
    env: CheckEnvironment,
    probe: Box<dyn InterpreterProbe>,
    builder: PathBuilder,
    json: bool,
}

impl CheckContext {
    /// Create a context with the default path builder and human output.
    pub fn new(env: CheckEnvironment, probe: Box<dyn InterpreterProbe>) -> Self {
        Self {
            env,
            probe,
            builder: PathBuilder::default(),
            json: false,
        }
    }

    /// Build the context from parsed arguments and the process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let probe: Box<dyn InterpreterProbe> = match &cli.interpreter_version {
            Some(version) => Box::new(StaticProbe::parse(version)?),
            None => Box::new(CommandProbe::new(cli.python.clone())),
        };
        let builder = PathBuilder::new(cli.x86_policy, cli.path_style)
            .with_marker(cli.freethreaded_marker);

        Ok(Self::new(CheckEnvironment::from_process(), probe)
            .with_builder(builder)
            .with_json(cli.json))
    }

    /// Use a different path builder.
    pub fn with_builder(mut self, builder: PathBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Report as JSON instead of human-readable lines.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The environment snapshot.
    pub fn env(&self) -> &CheckEnvironment {
        &self.env
    }

    /// The interpreter probe.
    pub fn probe(&self) -> &dyn InterpreterProbe {
        self.probe.as_ref()
    }

    /// Derive the expected `Scripts` path and require it on PATH.
    ///
    /// `always_show_verified` prints the verified path in normal mode too;
    /// otherwise it is a verbose-only detail.
    pub fn verify_install_path(
        &self,
        ui: &mut dyn UserInterface,
        check: CheckKind,
        source: &VersionSource,
        architecture: &str,
        freethreaded: &str,
        always_show_verified: bool,
    ) -> Result<CheckReport> {
        let (major, minor) = source.major_minor(self.probe())?;
        let request = InstallPathRequest::new(
            major,
            minor,
            Architecture::from_tag(architecture),
            parse_freethreaded(freethreaded),
        );
        tracing::debug!(?request, ?source, "install path request");

        let expected = self.builder.build(&request, &self.env.appdata);
        ui.message(&format!("Expected PATH entry: {expected}"));

        check_path_membership(&expected, &self.env.path)?;
        ui.success(PATH_PRESENT);

        let verified = format!("Verified path: {expected}");
        if always_show_verified {
            ui.message(&verified);
        } else {
            ui.detail(&verified);
        }
        let delimiter = self.builder.style().list_separator();
        let entries = matching_entries(&expected, &self.env.path, delimiter);
        if entries.is_empty() {
            // The substring test still passes; no single entry is the directory.
            ui.warning(PATH_SPANS_ENTRIES);
        }
        for entry in entries {
            ui.detail(&format!("Matched PATH entry: {entry}"));
        }

        Ok(CheckReport::pass(check, PATH_PRESENT).with_expected(expected))
    }

    /// Turn a check outcome into output and an exit code.
    ///
    /// Check failures are reported here and become exit code 1; only a
    /// failure to write the report itself is returned as an error.
    pub fn finish(
        &self,
        ui: &mut dyn UserInterface,
        check: CheckKind,
        outcome: Result<CheckReport>,
    ) -> Result<CommandResult> {
        let (report, result) = match outcome {
            Ok(report) => (report, CommandResult::success()),
            Err(err) => {
                tracing::debug!(kind = err.kind(), "check failed");
                if !self.json {
                    report_failure(ui, &err);
                }
                (CheckReport::fail(check, &err), CommandResult::failure(1))
            }
        };

        if self.json {
            let line = report
                .to_json()
                .context("Failed to serialize check report")?;
            ui.emit(&line);
        }

        Ok(result)
    }
}

fn report_failure(ui: &mut dyn UserInterface, err: &VerifyError) {
    match err {
        VerifyError::InvalidArgumentCount { usage: Some(usage) } => ui.usage(usage),
        VerifyError::PathNotFound { .. } => ui.error(PATH_MISSING),
        other => ui.error(&other.to_string()),
    }
}
