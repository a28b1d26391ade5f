//! Platform tags and install-layout knobs.
//!
//! Architecture and free-threaded inputs are taken verbatim from the command
//! line. Only `x86` and `arm64` change the install directory name; every
//! other architecture string (including `x64`) leaves it untouched.

use std::fmt;

use clap::ValueEnum;

/// Target CPU architecture of the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Architecture {
    /// 32-bit x86 build (`-32` directory suffix).
    X86,
    /// ARM64 build (`-arm64` directory suffix).
    Arm64,
    /// Any other tag, kept as given.
    Other(String),
}

impl Architecture {
    /// Interpret an architecture tag with exact, case-sensitive matching.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "x86" => Self::X86,
            "arm64" => Self::Arm64,
            other => Self::Other(other.to_string()),
        }
    }

    /// Directory-name marker for this architecture, if any.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::X86 => Some("-32"),
            Self::Arm64 => Some("-arm64"),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X86 => f.write_str("x86"),
            Self::Arm64 => f.write_str("arm64"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

/// Parse the free-threaded build flag.
///
/// Only the literal `true` enables it.
pub fn parse_freethreaded(value: &str) -> bool {
    value == "true"
}

/// When an `x86` interpreter gets the `-32` marker before the `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum X86SuffixPolicy {
    /// Always append `-32` for `x86`.
    #[default]
    Always,
    /// Only append `-32` for `x86` when the version is 3.10 or newer.
    #[value(name = "since-3.10")]
    Since310,
}

impl X86SuffixPolicy {
    /// Whether `-32` applies to the given version under this policy.
    pub fn applies_to(self, major: u32, minor: u32) -> bool {
        match self {
            Self::Always => true,
            Self::Since310 => (major, minor) >= (3, 10),
        }
    }
}

/// Where the architecture marker goes for a free-threaded build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FreethreadedMarker {
    /// Only after the `t` (`313t-arm64`), as in `sys.winver`.
    #[default]
    Winver,
    /// Before and after the `t` (`313-arm64t-arm64`).
    Repeated,
}

/// Separator convention used when joining install-path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PathStyle {
    /// Backslash-separated, `;`-delimited PATH.
    #[default]
    Windows,
    /// Slash-separated, `:`-delimited PATH.
    Posix,
}

impl PathStyle {
    /// Separator between path segments.
    pub fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Delimiter between PATH entries.
    pub fn list_separator(self) -> char {
        match self {
            Self::Windows => ';',
            Self::Posix => ':',
        }
    }

    /// Whether `s` already ends in something that acts as a separator.
    pub(crate) fn ends_with_separator(self, s: &str) -> bool {
        match self {
            Self::Windows => s.ends_with(['\\', '/', ':']),
            Self::Posix => s.ends_with('/'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_known_tags() {
        assert_eq!(Architecture::from_tag("x86"), Architecture::X86);
        assert_eq!(Architecture::from_tag("arm64"), Architecture::Arm64);
    }

    #[test]
    fn other_tags_are_kept_verbatim() {
        let arch = Architecture::from_tag("x64");
        assert_eq!(arch, Architecture::Other("x64".into()));
        assert_eq!(arch.to_string(), "x64");
        assert_eq!(arch.suffix(), None);
    }

    #[test]
    fn tag_matching_is_case_sensitive() {
        assert_eq!(
            Architecture::from_tag("X86"),
            Architecture::Other("X86".into())
        );
        assert_eq!(
            Architecture::from_tag("ARM64"),
            Architecture::Other("ARM64".into())
        );
    }

    #[test]
    fn suffixes() {
        assert_eq!(Architecture::X86.suffix(), Some("-32"));
        assert_eq!(Architecture::Arm64.suffix(), Some("-arm64"));
    }

    #[test]
    fn only_literal_true_is_freethreaded() {
        assert!(parse_freethreaded("true"));
        assert!(!parse_freethreaded("false"));
        assert!(!parse_freethreaded("True"));
        assert!(!parse_freethreaded("1"));
        assert!(!parse_freethreaded(""));
    }

    #[test]
    fn x86_policy_gate() {
        assert!(X86SuffixPolicy::Always.applies_to(3, 9));
        assert!(!X86SuffixPolicy::Since310.applies_to(3, 9));
        assert!(X86SuffixPolicy::Since310.applies_to(3, 10));
        assert!(X86SuffixPolicy::Since310.applies_to(4, 0));
        assert_eq!(X86SuffixPolicy::default(), X86SuffixPolicy::Always);
    }

    #[test]
    fn path_style_separators() {
        assert_eq!(PathStyle::Windows.separator(), '\\');
        assert_eq!(PathStyle::Windows.list_separator(), ';');
        assert_eq!(PathStyle::Posix.separator(), '/');
        assert_eq!(PathStyle::Posix.list_separator(), ':');
    }

    #[test]
    fn trailing_separator_detection() {
        assert!(PathStyle::Windows.ends_with_separator(r"C:\Users\"));
        assert!(PathStyle::Windows.ends_with_separator("C:"));
        assert!(!PathStyle::Windows.ends_with_separator(r"C:\Users"));
        assert!(PathStyle::Posix.ends_with_separator("/home/"));
        assert!(!PathStyle::Posix.ends_with_separator(r"C:\"));
    }
}
