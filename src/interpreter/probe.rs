//! Querying a Python interpreter for its version.

use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;

use crate::check::InterpreterVersion;
use crate::error::{Result, VerifyError};

/// Interpreter used when none is configured.
pub const DEFAULT_PYTHON: &str = "python";

/// Prints `major.minor.micro` on the first line and `1`/`0` for a
/// free-threaded build on the second.
const PROBE_SCRIPT: &str = "import sys, sysconfig; \
print('%d.%d.%d' % sys.version_info[:3]); \
print(1 if sysconfig.get_config_var('Py_GIL_DISABLED') else 0)";

static RE_PROBE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)(t)?").unwrap());

static RE_STATIC_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?(t)?\s*$").unwrap());

/// Source of the running interpreter's version.
pub trait InterpreterProbe {
    /// Query the interpreter.
    fn probe(&self) -> Result<InterpreterVersion>;

    /// Human-readable name for diagnostics.
    fn describe(&self) -> String;
}

/// Runs an interpreter executable and parses what it prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProbe {
    program: String,
}

impl CommandProbe {
    /// Probe the given executable (name on PATH or full path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable being probed.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn probe_error(&self, message: impl Into<String>) -> VerifyError {
        VerifyError::InterpreterProbe {
            interpreter: self.program.clone(),
            message: message.into(),
        }
    }
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl InterpreterProbe for CommandProbe {
    fn probe(&self) -> Result<InterpreterVersion> {
        tracing::debug!(program = %self.program, "probing interpreter");

        let output = Command::new(&self.program)
            .arg("-c")
            .arg(PROBE_SCRIPT)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.probe_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.probe_error(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = parse_probe_output(&stdout)
            .ok_or_else(|| self.probe_error(format!("unrecognised output: {}", stdout.trim())))?;

        tracing::debug!(%version, "interpreter reported version");
        Ok(version)
    }

    fn describe(&self) -> String {
        self.program.clone()
    }
}

/// Parse interpreter output.
///
/// The first `X.Y.Z` found is the version. A trailing `t` on it, or a second
/// line reading `1`, marks a free-threaded build. `Python 3.12.4` (the
/// `--version` format) is accepted too.
pub fn parse_probe_output(output: &str) -> Option<InterpreterVersion> {
    let caps = RE_PROBE_VERSION.captures(output)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let micro = caps[3].parse().ok()?;

    let flag_line = output.lines().nth(1).map(str::trim) == Some("1");
    let freethreaded = caps.get(4).is_some() || flag_line;

    Some(InterpreterVersion::new(major, minor, micro).freethreaded(freethreaded))
}

/// A fixed answer, used when the version is supplied up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProbe {
    version: InterpreterVersion,
}

impl StaticProbe {
    pub fn new(version: InterpreterVersion) -> Self {
        Self { version }
    }

    /// Parse `X.Y`, `X.Y.Z`, optionally with a trailing `t`.
    ///
    /// A missing micro component is taken as `0`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || VerifyError::InvalidVersionFormat {
            input: input.to_string(),
        };

        let caps = RE_STATIC_VERSION.captures(input).ok_or_else(invalid)?;
        let major = caps[1].parse().map_err(|_| invalid())?;
        let minor = caps[2].parse().map_err(|_| invalid())?;
        let micro = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };

        let version =
            InterpreterVersion::new(major, minor, micro).freethreaded(caps.get(4).is_some());
        Ok(Self::new(version))
    }
}

impl InterpreterProbe for StaticProbe {
    fn probe(&self) -> Result<InterpreterVersion> {
        Ok(self.version)
    }

    fn describe(&self) -> String {
        format!("fixed version {}", self.version)
    }
}
