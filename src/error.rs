//! Error types for pyverify checks.
//!
//! This module defines [`VerifyError`], the error type shared by every check,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is terminal for the invocation; there is no retry
//! - Check failures carry enough context to print a useful diagnostic
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for pyverify operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Wrong number of command-line tokens or version components.
    #[error("Incorrect number of arguments supplied")]
    InvalidArgumentCount {
        /// Usage line for the variant that was invoked, if any.
        usage: Option<String>,
    },

    /// Version string could not be parsed.
    #[error("Invalid version format: '{input}'")]
    InvalidVersionFormat { input: String },

    /// Expected version disagrees with the interpreter.
    #[error("Incorrect {granularity} version detected\nExpected: {expected}\nActual: {actual}")]
    VersionMismatch {
        granularity: String,
        expected: String,
        actual: String,
    },

    /// Expected path is absent from PATH.
    #[error("Expected path not found in PATH: {expected}")]
    PathNotFound { expected: String },

    /// A top-level option was given after the subcommand.
    #[error("Option '{option}' must come before the subcommand")]
    MisplacedOption { option: String },

    /// The interpreter could not be queried.
    #[error("Failed to query interpreter '{interpreter}': {message}")]
    InterpreterProbe {
        interpreter: String,
        message: String,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VerifyError {
    /// Arity error without a usage line.
    pub fn argument_count() -> Self {
        Self::InvalidArgumentCount { usage: None }
    }

    /// Arity error that should be followed by a usage line.
    pub fn usage(usage: impl Into<String>) -> Self {
        Self::InvalidArgumentCount {
            usage: Some(usage.into()),
        }
    }

    /// Short machine-friendly name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgumentCount { .. } => "invalid_argument_count",
            Self::InvalidVersionFormat { .. } => "invalid_version_format",
            Self::VersionMismatch { .. } => "version_mismatch",
            Self::PathNotFound { .. } => "path_not_found",
            Self::MisplacedOption { .. } => "misplaced_option",
            Self::InterpreterProbe { .. } => "interpreter_probe",
            Self::Other(_) => "other",
        }
    }
}

/// Result type alias for pyverify operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
