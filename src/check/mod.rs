//! Pure check logic.
//!
//! Nothing in this module reads the process environment; callers pass the
//! relevant values in explicitly.
//!
//! - [`version`] - expected-version parsing and comparison
//! - [`install_path`] - expected per-user `Scripts` path construction
//! - [`path_env`] - PATH membership test
//! - [`platform`] - architecture tags and layout policies
//! - [`report`] - machine-readable outcome

pub mod install_path;
pub mod path_env;
pub mod platform;
pub mod report;
pub mod version;

pub use install_path::{InstallPathRequest, PathBuilder, DEFAULT_INSTALL_VERSION};
pub use path_env::{check_path_membership, matching_entries, path_contains};
pub use platform::{parse_freethreaded, Architecture, FreethreadedMarker, PathStyle, X86SuffixPolicy};
pub use report::{CheckKind, CheckReport};
pub use version::{compare_version, extract_major_minor, InterpreterVersion, VersionMatch, VersionSpec};
