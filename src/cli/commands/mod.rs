//! Command implementations.
//!
//! Each check subcommand parses its own operands, runs through the shared
//! [`CheckContext`], and reports the outcome via [`CheckContext::finish`].

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod install_path;
pub mod user_install_path;
pub mod version;

pub use context::CheckContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use install_path::INSTALL_PATH_USAGE;
