//! App-wide constants.
//!
//! Centralises the tool name, config file name, INI dialect limits and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "agromanagement";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the configuration file under the root directory.
pub const CONFIG_FILENAME: &str = "config.ini";

/// Separator used to join the root directory and [`CONFIG_FILENAME`]
/// under the default (Windows) path style.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Root directory used when no override is present.
pub const DEFAULT_ROOT_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Section whose options are inherited by every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Maximum nesting of `%(name)s` references before giving up.
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_ROOT_DIR: &str = "AGROMANAGEMENT_ROOT_DIR";
pub const ENV_PATH_STYLE: &str = "AGROMANAGEMENT_PATH_STYLE";
pub const ENV_LOG: &str = "AGROMANAGEMENT_LOG";
