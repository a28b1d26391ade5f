//! PATH membership check.
//!
//! The check is a case-insensitive substring test over the whole PATH value,
//! not a per-entry comparison. An expected path that is a prefix of some
//! longer, unrelated entry is accepted.

use crate::error::{Result, VerifyError};

/// Whether `expected` occurs anywhere in `path_value`, ignoring case.
pub fn path_contains(expected: &str, path_value: &str) -> bool {
    path_value.to_lowercase().contains(&expected.to_lowercase())
}

/// Fail with [`VerifyError::PathNotFound`] unless `expected` is on PATH.
pub fn check_path_membership(expected: &str, path_value: &str) -> Result<()> {
    if path_contains(expected, path_value) {
        Ok(())
    } else {
        tracing::debug!(expected, path_len = path_value.len(), "expected path missing from PATH");
        Err(VerifyError::PathNotFound {
            expected: expected.to_string(),
        })
    }
}

/// PATH entries that contain `expected`, ignoring case.
///
/// Only used for diagnostics. An expected path that spans a delimiter
/// passes [`check_path_membership`] without appearing here.
pub fn matching_entries<'a>(expected: &str, path_value: &'a str, delimiter: char) -> Vec<&'a str> {
    let needle = expected.to_lowercase();
    path_value
        .split(delimiter)
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .collect()
}
