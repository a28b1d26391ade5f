//! Where the interpreter version comes from.
//!
//! The version check and the flag-style install-path check compare against a
//! real interpreter, queried through an [`InterpreterProbe`]. The positional
//! install-path forms take their version from the command line or a fixed
//! default instead; [`VersionSource`] captures that choice.

pub mod probe;
pub mod source;

pub use probe::{parse_probe_output, CommandProbe, InterpreterProbe, StaticProbe, DEFAULT_PYTHON};
pub use source::VersionSource;
