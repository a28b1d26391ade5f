//! Flag/value token pairing for the `user-install-path` form.
//!
//! The operands are exactly four tokens. Tokens at even positions are keys
//! and the token after each key is its value; a repeated key keeps its last
//! value. Unknown keys are ignored and missing keys read as absent.

use std::collections::HashMap;

use crate::error::{Result, VerifyError};

/// Usage line for the flag form.
pub const USER_INSTALL_PATH_USAGE: &str =
    "Usage: pyverify user-install-path -arch <architecture> -freethreaded <freethreaded>";

const ARCH_FLAG: &str = "-arch";
const FREETHREADED_FLAG: &str = "-freethreaded";
const EXPECTED_TOKENS: usize = 4;

/// Values picked out of the flag tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagArgs {
    pub architecture: Option<String>,
    pub freethreaded: Option<String>,
}

/// Pair tokens as `flag value` and look up `-arch` and `-freethreaded`.
pub fn parse_flag_pairs(tokens: &[String]) -> Result<FlagArgs> {
    if tokens.len() != EXPECTED_TOKENS {
        return Err(VerifyError::usage(USER_INSTALL_PATH_USAGE));
    }

    let pairs: HashMap<&str, &str> = tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();
    tracing::debug!(?pairs, "parsed flag pairs");

    Ok(FlagArgs {
        architecture: pairs.get(ARCH_FLAG).map(|v| v.to_string()),
        freethreaded: pairs.get(FREETHREADED_FLAG).map(|v| v.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_flags_with_values() {
        let args = parse_flag_pairs(&tokens(&["-arch", "x86", "-freethreaded", "true"])).unwrap();
        assert_eq!(args.architecture.as_deref(), Some("x86"));
        assert_eq!(args.freethreaded.as_deref(), Some("true"));
    }

    #[test]
    fn order_does_not_matter() {
        let args = parse_flag_pairs(&tokens(&["-freethreaded", "false", "-arch", "arm64"])).unwrap();
        assert_eq!(args.architecture.as_deref(), Some("arm64"));
        assert_eq!(args.freethreaded.as_deref(), Some("false"));
    }

    #[test]
    fn wrong_arity_is_usage_error() {
        for list in [
            &[][..],
            &["-arch", "x86"][..],
            &["-arch", "x86", "-freethreaded"][..],
            &["-arch", "x86", "-freethreaded", "true", "extra"][..],
        ] {
            let err = parse_flag_pairs(&tokens(list)).unwrap_err();
            match err {
                VerifyError::InvalidArgumentCount { usage } => {
                    assert_eq!(usage.as_deref(), Some(USER_INSTALL_PATH_USAGE));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_keys_leave_values_absent() {
        let args = parse_flag_pairs(&tokens(&["--arch", "x86", "-ft", "true"])).unwrap();
        assert_eq!(args, FlagArgs::default());
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let args = parse_flag_pairs(&tokens(&["-arch", "x86", "-arch", "arm64"])).unwrap();
        assert_eq!(args.architecture.as_deref(), Some("arm64"));
        assert_eq!(args.freethreaded, None);
    }
}
