//! pyverify - Acceptance checks for a provisioned Python interpreter.
//!
//! pyverify asserts that the interpreter on a machine has the expected
//! version and that its per-user Windows `Scripts` directory is on `PATH`.
//! Each invocation is a single check that exits `0` on success and `1` on
//! failure or misuse.
//!
//! # Modules
//!
//! - [`check`] - Version comparison, install-path construction, PATH test
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - `APPDATA` / `PATH` snapshot
//! - [`error`] - Error types and result aliases
//! - [`interpreter`] - Querying the interpreter for its version
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pyverify::check::{Architecture, InstallPathRequest, PathBuilder};
//!
//! let request = InstallPathRequest::new(3, 13, Architecture::from_tag("x86"), false);
//! let path = PathBuilder::default().build(&request, r"C:\Users\x\AppData\Roaming");
//! assert_eq!(path, r"C:\Users\x\AppData\Roaming\Python\Python313-32\Scripts");
//! ```

pub mod check;
pub mod cli;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod ui;

pub use error::{Result, VerifyError};
