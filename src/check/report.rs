//! Machine-readable check outcome, printed with `--json`.

use serde::Serialize;

use crate::error::VerifyError;

/// Which check produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Version,
    InstallPath,
    UserInstallPath,
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub check: CheckKind,
    pub passed: bool,
    /// Expected version or path, when one was derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Observed value, when one was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    pub message: String,
    /// Failure kind, see [`VerifyError::kind`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl CheckReport {
    /// A passing report.
    pub fn pass(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            passed: true,
            expected: None,
            actual: None,
            message: message.into(),
            error: None,
        }
    }

    /// A failing report built from the error that ended the check.
    pub fn fail(check: CheckKind, err: &VerifyError) -> Self {
        let (expected, actual) = match err {
            VerifyError::VersionMismatch {
                expected, actual, ..
            } => (Some(expected.clone()), Some(actual.clone())),
            VerifyError::PathNotFound { expected } => (Some(expected.clone()), None),
            _ => (None, None),
        };

        Self {
            check,
            passed: false,
            expected,
            actual,
            message: err.to_string(),
            error: Some(err.kind()),
        }
    }

    /// Set the expected value.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Set the observed value.
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Render as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
