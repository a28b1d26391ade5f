//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! The check subcommands take their operands as raw tokens so that arity is
//! validated by the checks themselves (exit code 1 with a usage line) rather
//! than by clap. Top-level options therefore have to come before the
//! subcommand; after it they are operands, and [`reject_misplaced_options`]
//! turns them into a clear error.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::check::{CheckKind, FreethreadedMarker, PathStyle, X86SuffixPolicy};
use crate::error::{Result, VerifyError};
use crate::interpreter::DEFAULT_PYTHON;

/// pyverify - Acceptance checks for a provisioned Python interpreter.
#[derive(Debug, Parser)]
#[command(name = "pyverify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show diagnostic detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print a JSON report instead of human-readable lines
    #[arg(long)]
    pub json: bool,

    /// Python interpreter to query
    #[arg(long, env = "PYVERIFY_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Use this interpreter version instead of querying the interpreter
    #[arg(
        long,
        env = "PYVERIFY_INTERPRETER_VERSION",
        value_name = "VERSION"
    )]
    pub interpreter_version: Option<String>,

    /// When x86 installs get the -32 directory marker
    #[arg(long, value_enum, default_value_t = X86SuffixPolicy::Always)]
    pub x86_policy: X86SuffixPolicy,

    /// Where the architecture marker goes for free-threaded installs
    #[arg(long, value_enum, default_value_t = FreethreadedMarker::Winver)]
    pub freethreaded_marker: FreethreadedMarker,

    /// Separator convention for the expected path
    #[arg(long, value_enum, default_value_t = PathStyle::Windows)]
    pub path_style: PathStyle,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the interpreter version: <version>
    Version(VersionArgs),

    /// Check the per-user Scripts directory is on PATH: [<version>] <arch> <freethreaded>
    InstallPath(InstallPathArgs),

    /// Same check using the interpreter's version: -arch <arch> -freethreaded <freethreaded>
    UserInstallPath(UserInstallPathArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// The check this subcommand runs, if it is one.
    pub fn check_kind(&self) -> Option<CheckKind> {
        match self {
            Self::Version(_) => Some(CheckKind::Version),
            Self::InstallPath(_) => Some(CheckKind::InstallPath),
            Self::UserInstallPath(_) => Some(CheckKind::UserInstallPath),
            Self::Completions(_) => None,
        }
    }
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Expected version (X.Y or X.Y.Z, optionally with a `t` suffix)
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `install-path` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallPathArgs {
    /// [<version>] <architecture> <freethreaded>
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `user-install-path` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UserInstallPathArgs {
    /// -arch <architecture> -freethreaded <freethreaded>
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Fail if an operand spells one of the top-level options.
///
/// Matches `--long`, `--long=value` and `-s`. Single-dash words such as
/// `-arch` are left alone.
pub fn reject_misplaced_options(tokens: &[String]) -> Result<()> {
    let cli = Cli::command();
    for token in tokens {
        let name = token.split_once('=').map_or(token.as_str(), |(name, _)| name);
        let known = cli.get_arguments().any(|arg| {
            let long = arg
                .get_long()
                .is_some_and(|long| name.strip_prefix("--") == Some(long));
            let short = arg.get_short().is_some_and(|short| {
                name.strip_prefix('-')
                    .is_some_and(|rest| rest.chars().eq([short]))
            });
            long || short
        });
        if known {
            return Err(VerifyError::MisplacedOption {
                option: token.clone(),
            });
        }
    }
    Ok(())
}
