//! Environment inputs for the install-path checks.
//!
//! `APPDATA` and `PATH` are read once, up front, into a
//! [`CheckEnvironment`]. The check logic only ever sees that snapshot, so it
//! can be exercised with arbitrary values in tests.

pub mod vars;

pub use vars::{CheckEnvironment, APPDATA_VAR, PATH_VAR};
