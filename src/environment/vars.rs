//! Snapshot of the environment variables the checks depend on.

/// Base directory of per-user installs on Windows.
pub const APPDATA_VAR: &str = "APPDATA";

/// Executable search path.
pub const PATH_VAR: &str = "PATH";

/// Values of `APPDATA` and `PATH`, each empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckEnvironment {
    /// `APPDATA`, or empty.
    pub appdata: String,
    /// `PATH`, or empty.
    pub path: String,
}

impl CheckEnvironment {
    /// Create from explicit values.
    pub fn new(appdata: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            appdata: appdata.into(),
            path: path.into(),
        }
    }

    /// Read from the current process environment.
    ///
    /// Values that are not valid Unicode are converted lossily rather than
    /// treated as unset.
    pub fn from_process() -> Self {
        Self::from_env_fn(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Read through a custom lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_fn<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Self {
            appdata: env_fn(APPDATA_VAR).unwrap_or_default(),
            path: env_fn(PATH_VAR).unwrap_or_default(),
        };
        tracing::debug!(appdata = %env.appdata, path_len = env.path.len(), "read check environment");
        env
    }
}
