//! Root directory resolution and config path construction.
//!
//! The config path is built by plain string concatenation of the root
//! directory, a separator, and [`CONFIG_FILENAME`]. The default separator is
//! a literal backslash regardless of host platform; [`PathStyle::Native`]
//! opts into the host separator instead.

use std::fmt;
use std::path::{MAIN_SEPARATOR, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_ROOT_DIR, ENV_PATH_STYLE, ENV_ROOT_DIR, WINDOWS_SEPARATOR,
};
use crate::env::Env;

/// Errors while resolving the root directory.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("{var} must be an absolute path, got '{}'", path.display())]
    RelativeRoot { var: &'static str, path: PathBuf },

    #[error("root directory not found: {}: {source}", path.display())]
    RootNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How the root directory and the config filename are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathStyle {
    /// Literal `\` separator, independent of the host.
    #[default]
    Windows,
    /// The host's own separator.
    Native,
}

impl PathStyle {
    pub fn separator(self) -> char {
        match self {
            PathStyle::Windows => WINDOWS_SEPARATOR,
            PathStyle::Native => MAIN_SEPARATOR,
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Windows => write!(f, "windows"),
            PathStyle::Native => write!(f, "native"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(PathStyle::Windows),
            "native" => Ok(PathStyle::Native),
            other => Err(format!("unknown path style '{other}' (expected windows or native)")),
        }
    }
}

/// Resolve the package root directory.
///
/// `AGROMANAGEMENT_ROOT_DIR` wins when set and non-empty; otherwise the
/// crate's manifest directory captured at build time is used.
pub fn root_dir(env: &Env) -> Result<PathBuf, PathError> {
    match env.non_empty(ENV_ROOT_DIR) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            if !path.is_absolute() {
                return Err(PathError::RelativeRoot {
                    var: ENV_ROOT_DIR,
                    path,
                });
            }
            Ok(path)
        }
        None => Ok(PathBuf::from(DEFAULT_ROOT_DIR)),
    }
}

/// Resolve the path style, falling back to the default on unknown values.
pub fn path_style(env: &Env) -> PathStyle {
    let Some(raw) = env.non_empty(ENV_PATH_STYLE) else {
        return PathStyle::default();
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("ignoring invalid {ENV_PATH_STYLE} value: {e}");
        PathStyle::default()
    })
}

/// Build the config file path for `root_dir`.
pub fn config_path(root_dir: &str, style: PathStyle) -> String {
    format!("{root_dir}{}{CONFIG_FILENAME}", style.separator())
}
