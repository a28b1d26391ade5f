//! Expected per-user `Scripts` directory.
//!
//! A per-user install lives under
//! `%APPDATA%\Python\Python<suffix>\Scripts`, where the suffix is the
//! concatenated major/minor digits plus architecture and free-threaded
//! markers, e.g. `313`, `313-32`, `313t-arm64`. This matches the
//! interpreter's `sys.winver` with the dot removed.

use super::platform::{Architecture, FreethreadedMarker, PathStyle, X86SuffixPolicy};

/// Version used by the two-argument install-path form.
pub const DEFAULT_INSTALL_VERSION: (u32, u32) = (3, 13);

/// Inputs that determine the install directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPathRequest {
    pub major: u32,
    pub minor: u32,
    pub architecture: Architecture,
    pub freethreaded: bool,
}

impl InstallPathRequest {
    pub fn new(major: u32, minor: u32, architecture: Architecture, freethreaded: bool) -> Self {
        Self {
            major,
            minor,
            architecture,
            freethreaded,
        }
    }
}

/// Builds expected install paths under a fixed policy and path style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathBuilder {
    policy: X86SuffixPolicy,
    marker: FreethreadedMarker,
    style: PathStyle,
}

impl PathBuilder {
    /// Create a builder.
    pub fn new(policy: X86SuffixPolicy, style: PathStyle) -> Self {
        Self {
            policy,
            marker: FreethreadedMarker::default(),
            style,
        }
    }

    /// Use a different architecture-marker placement for free-threaded builds.
    pub fn with_marker(mut self, marker: FreethreadedMarker) -> Self {
        self.marker = marker;
        self
    }

    /// The path style in use.
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Directory-name suffix for the request.
    ///
    /// For regular builds the architecture marker follows the version digits,
    /// subject to the x86 policy gate. For free-threaded builds it follows
    /// the `t` and is never gated; [`FreethreadedMarker::Repeated`] also
    /// keeps the marker before the `t`.
    pub fn version_suffix(&self, request: &InstallPathRequest) -> String {
        let mut suffix = format!("{}{}", request.major, request.minor);

        if !request.freethreaded || self.marker == FreethreadedMarker::Repeated {
            match request.architecture {
                Architecture::X86 if self.policy.applies_to(request.major, request.minor) => {
                    suffix.push_str("-32");
                }
                Architecture::Arm64 => suffix.push_str("-arm64"),
                _ => {}
            }
        }

        if request.freethreaded {
            suffix.push('t');
            if let Some(marker) = request.architecture.suffix() {
                suffix.push_str(marker);
            }
        }

        suffix
    }

    /// Full expected `Scripts` path below `base_dir`.
    pub fn build(&self, request: &InstallPathRequest, base_dir: &str) -> String {
        let suffix = self.version_suffix(request);
        tracing::debug!(%suffix, base_dir, "building expected install path");

        let dir_name = format!("Python{suffix}");
        join_segments(self.style, &[base_dir, "Python", &dir_name, "Scripts"])
    }
}

/// Join segments the way `os.path.join` does for simple relative parts.
///
/// Empty segments add nothing; no separator is inserted after a segment that
/// already ends with one.
fn join_segments(style: PathStyle, segments: &[&str]) -> String {
    let mut joined = String::new();
    for segment in segments {
        if !joined.is_empty() && !style.ends_with_separator(&joined) {
            joined.push(style.separator());
        }
        joined.push_str(segment);
    }
    joined
}
