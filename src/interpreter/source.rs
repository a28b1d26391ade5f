//! Version source for the install-path checks.

use crate::check::extract_major_minor;
use crate::error::Result;

use super::InterpreterProbe;

/// Where the `(major, minor)` of an install-path check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// A fixed version.
    Literal { major: u32, minor: u32 },
    /// A version string given on the command line.
    Cli(String),
    /// The interpreter being checked.
    Interpreter,
}

impl VersionSource {
    /// Resolve to `(major, minor)`.
    ///
    /// The probe is only consulted for [`VersionSource::Interpreter`].
    pub fn major_minor(&self, probe: &dyn InterpreterProbe) -> Result<(u32, u32)> {
        match self {
            Self::Literal { major, minor } => Ok((*major, *minor)),
            Self::Cli(version) => extract_major_minor(version),
            Self::Interpreter => {
                let version = probe.probe()?;
                Ok((version.major, version.minor))
            }
        }
    }
}
