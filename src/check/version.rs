//! Version parsing and comparison.
//!
//! The expected version is compared as text against the interpreter's
//! `major.minor` or `major.minor.micro`, depending on how many components
//! the expectation names. `3.013` therefore does not match `3.13`, and
//! components are never range-limited: `3.99999999999` is a valid
//! expectation that simply does not match.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, VerifyError};

static RE_MAJOR_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)").unwrap());

const DEV_SUFFIX: &str = "-dev";

/// An expected interpreter version.
///
/// Components are kept as the digit strings that were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    /// Major component.
    pub major: String,
    /// Minor component.
    pub minor: String,
    /// Micro component, when the expectation names one.
    pub micro: Option<String>,
    /// Whether a free-threaded build is expected (`t` marker).
    pub freethreaded: bool,
    numeric: String,
}

impl VersionSpec {
    /// Parse `X.Y` or `X.Y.Z`, optionally followed by `t` and/or `-dev`.
    ///
    /// Any other number of components is an argument-count error. The input
    /// is taken as given, so surrounding whitespace makes it malformed.
    pub fn parse(input: &str) -> Result<Self> {
        let body = input.strip_suffix(DEV_SUFFIX).unwrap_or(input);
        let (numeric, freethreaded) = match body.strip_suffix('t') {
            Some(rest) if rest.ends_with(|c: char| c.is_ascii_digit()) => (rest, true),
            _ => (body, false),
        };

        let parts: Vec<&str> = numeric.split('.').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(VerifyError::argument_count());
        }

        if !parts.iter().all(|part| is_digits(part)) {
            return Err(VerifyError::InvalidVersionFormat {
                input: input.to_string(),
            });
        }

        Ok(Self {
            major: parts[0].to_string(),
            minor: parts[1].to_string(),
            micro: parts.get(2).map(|micro| micro.to_string()),
            freethreaded,
            numeric: numeric.to_string(),
        })
    }

    /// The numeric part as written, without markers.
    pub fn numeric(&self) -> &str {
        &self.numeric
    }

    /// Label for the compared components, used in mismatch messages.
    pub fn granularity(&self) -> &'static str {
        if self.micro.is_some() {
            "major + minor + micro"
        } else {
            "major + minor"
        }
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// Version reported by a Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    /// Built without the global interpreter lock.
    pub freethreaded: bool,
}

impl InterpreterVersion {
    /// A regular (GIL) build.
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            freethreaded: false,
        }
    }

    /// Mark as a free-threaded build.
    pub fn freethreaded(mut self, freethreaded: bool) -> Self {
        self.freethreaded = freethreaded;
        self
    }

    /// `major.minor`.
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// `major.minor.micro`.
    pub fn major_minor_micro(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major_minor_micro())?;
        if self.freethreaded {
            f.write_str("t")?;
        }
        Ok(())
    }
}

/// A confirmed version expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    /// Expected version as supplied.
    pub expected: String,
    /// Actual version, at the compared granularity.
    pub actual: String,
}

impl VersionMatch {
    /// Confirmation line.
    pub fn message(&self) -> String {
        format!("Correct version of Python {} detected", self.expected)
    }
}

/// Compare an expected version string against the interpreter.
pub fn compare_version(expected: &str, actual: &InterpreterVersion) -> Result<VersionMatch> {
    let spec = VersionSpec::parse(expected)?;

    let mut observed = match spec.micro {
        Some(_) => actual.major_minor_micro(),
        None => actual.major_minor(),
    };
    let numeric_matches = spec.numeric() == observed;

    if spec.freethreaded && actual.freethreaded {
        observed.push('t');
    }

    if !numeric_matches || (spec.freethreaded && !actual.freethreaded) {
        return Err(VerifyError::VersionMismatch {
            granularity: spec.granularity().to_string(),
            expected: expected.to_string(),
            actual: observed,
        });
    }

    tracing::debug!(expected, actual = %actual, "version expectation met");

    Ok(VersionMatch {
        expected: expected.to_string(),
        actual: observed,
    })
}

/// Pull `(major, minor)` out of the start of a version string.
///
/// Anything after the minor component is ignored, so `3.12.1`, `3.13t` and
/// `3.14-dev` are all accepted.
pub fn extract_major_minor(input: &str) -> Result<(u32, u32)> {
    let invalid = || VerifyError::InvalidVersionFormat {
        input: input.to_string(),
    };

    let caps = RE_MAJOR_MINOR.captures(input).ok_or_else(invalid)?;
    let major = caps[1].parse::<u32>().map_err(|_| invalid())?;
    let minor = caps[2].parse::<u32>().map_err(|_| invalid())?;
    Ok((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn py(major: u32, minor: u32, micro: u32) -> InterpreterVersion {
        InterpreterVersion::new(major, minor, micro)
    }

    #[test]
    fn parse_two_components() {
        let spec = VersionSpec::parse("3.13").unwrap();
        assert_eq!(spec.major, "3");
        assert_eq!(spec.minor, "13");
        assert_eq!(spec.micro, None);
        assert!(!spec.freethreaded);
        assert_eq!(spec.granularity(), "major + minor");
    }

    #[test]
    fn parse_three_components() {
        let spec = VersionSpec::parse("3.12.4").unwrap();
        assert_eq!(spec.micro.as_deref(), Some("4"));
        assert_eq!(spec.granularity(), "major + minor + micro");
    }

    #[test]
    fn parse_freethreaded_and_dev_markers() {
        let spec = VersionSpec::parse("3.13t").unwrap();
        assert!(spec.freethreaded);
        assert_eq!(spec.numeric(), "3.13");

        let spec = VersionSpec::parse("3.13.1t").unwrap();
        assert!(spec.freethreaded);
        assert_eq!(spec.micro.as_deref(), Some("1"));

        let spec = VersionSpec::parse("3.14-dev").unwrap();
        assert!(!spec.freethreaded);
        assert_eq!(spec.numeric(), "3.14");

        let spec = VersionSpec::parse("3.14t-dev").unwrap();
        assert!(spec.freethreaded);
        assert_eq!(spec.numeric(), "3.14");
    }

    #[test]
    fn wrong_component_count_is_argument_error() {
        for input in ["", "3", "3.13.1.2", "1.2.3.4.5"] {
            let err = VersionSpec::parse(input).unwrap_err();
            assert!(
                matches!(err, VerifyError::InvalidArgumentCount { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn non_numeric_component_is_format_error() {
        for input in ["3.x", "3.", "3.-1", "3.+13", " 3.13", "3.13 "] {
            let err = VersionSpec::parse(input).unwrap_err();
            assert!(
                matches!(err, VerifyError::InvalidVersionFormat { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_not_ignored() {
        assert!(compare_version(" 3.13", &py(3, 13, 0)).is_err());
        assert!(compare_version("3.13\n", &py(3, 13, 0)).is_err());
    }

    #[test]
    fn oversized_component_is_a_mismatch() {
        let err = compare_version("3.99999999999", &py(3, 13, 0)).unwrap_err();
        assert!(matches!(err, VerifyError::VersionMismatch { .. }));
        let msg = err.to_string();
        assert!(msg.contains("Expected: 3.99999999999"));
        assert!(msg.contains("Actual: 3.13"));

        let err = compare_version("99999999999999999999.13.0", &py(3, 13, 0)).unwrap_err();
        assert!(err.to_string().contains("Actual: 3.13.0"));
    }

    #[test]
    fn two_component_match() {
        let m = compare_version("3.13", &py(3, 13, 2)).unwrap();
        assert_eq!(m.message(), "Correct version of Python 3.13 detected");
        assert_eq!(m.actual, "3.13");
    }

    #[test]
    fn two_component_mismatch_names_both() {
        let err = compare_version("3.12", &py(3, 13, 2)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Incorrect major + minor version detected"));
        assert!(msg.contains("Expected: 3.12"));
        assert!(msg.contains("Actual: 3.13"));
    }

    #[test]
    fn three_component_match_and_mismatch() {
        assert!(compare_version("3.13.2", &py(3, 13, 2)).is_ok());

        let err = compare_version("3.13.1", &py(3, 13, 2)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("major + minor + micro"));
        assert!(msg.contains("Expected: 3.13.1"));
        assert!(msg.contains("Actual: 3.13.2"));
    }

    #[test]
    fn comparison_is_textual() {
        assert!(compare_version("3.013", &py(3, 13, 0)).is_err());
    }

    #[test]
    fn bad_component_counts_always_fail() {
        for input in ["", "3", "3.13.2.1"] {
            let err = compare_version(input, &py(3, 13, 2)).unwrap_err();
            assert!(matches!(err, VerifyError::InvalidArgumentCount { .. }));
        }
    }

    #[test]
    fn freethreaded_expectation_requires_freethreaded_build() {
        let err = compare_version("3.13t", &py(3, 13, 0)).unwrap_err();
        assert!(err.to_string().contains("Actual: 3.13"));

        let m = compare_version("3.13t", &py(3, 13, 0).freethreaded(true)).unwrap();
        assert_eq!(m.actual, "3.13t");
    }

    #[test]
    fn plain_expectation_accepts_freethreaded_build() {
        assert!(compare_version("3.13", &py(3, 13, 0).freethreaded(true)).is_ok());
    }

    #[test]
    fn dev_expectation_compares_major_minor() {
        assert!(compare_version("3.14-dev", &py(3, 14, 0)).is_ok());
        assert!(compare_version("3.14-dev", &py(3, 13, 0)).is_err());
    }

    #[test]
    fn interpreter_version_display() {
        assert_eq!(py(3, 12, 4).to_string(), "3.12.4");
        assert_eq!(py(3, 13, 0).freethreaded(true).to_string(), "3.13.0t");
    }

    #[test]
    fn extract_major_minor_variants() {
        assert_eq!(extract_major_minor("3.13").unwrap(), (3, 13));
        assert_eq!(extract_major_minor("3.9.18").unwrap(), (3, 9));
        assert_eq!(extract_major_minor("3.14t-dev").unwrap(), (3, 14));
        assert_eq!(extract_major_minor(" 3.10").unwrap(), (3, 10));
    }

    #[test]
    fn extract_major_minor_rejects_garbage() {
        for input in ["", "3", "python3.13", "x.y"] {
            let err = extract_major_minor(input).unwrap_err();
            assert!(matches!(err, VerifyError::InvalidVersionFormat { .. }));
        }
    }
}
