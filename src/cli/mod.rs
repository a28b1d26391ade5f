//! Command-line interface for pyverify.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`flag_pairs`] - `-flag value` token pairing for the flag-style form

pub mod args;
pub mod commands;
pub mod flag_pairs;

pub use args::{
    reject_misplaced_options, Cli, Commands, CompletionsArgs, InstallPathArgs,
    UserInstallPathArgs, VersionArgs,
};
pub use commands::{CheckContext, Command, CommandDispatcher, CommandResult};
pub use flag_pairs::{parse_flag_pairs, FlagArgs, USER_INSTALL_PATH_USAGE};
