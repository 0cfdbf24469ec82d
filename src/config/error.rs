use std::path::PathBuf;

use thiserror::Error;

/// Errors while loading or querying the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}:{line}: {kind}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        kind: ParseErrorKind,
    },

    #[error("no section [{0}]")]
    NoSection(String),

    #[error("no option '{key}' in section [{section}]")]
    NoOption { section: String, key: String },

    #[error("invalid value for {section}.{key}: expected {expected}, got '{value}'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("interpolation of {section}.{key} exceeded depth {depth}")]
    InterpolationDepth {
        section: String,
        key: String,
        depth: usize,
    },

    #[error("{section}.{key} references missing option '{reference}'")]
    InterpolationMissing {
        section: String,
        key: String,
        reference: String,
    },

    #[error("malformed interpolation in {section}.{key}: {detail}")]
    InterpolationSyntax {
        section: String,
        key: String,
        detail: &'static str,
    },
}

impl ConfigError {
    /// Whether the error means "not present" rather than "broken".
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::NoSection(_) | ConfigError::NoOption { .. })
    }
}

/// What went wrong on a specific line of the INI file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("option found before any [section] header")]
    MissingSectionHeader,

    #[error("empty section name")]
    EmptySectionName,

    #[error("duplicate section [{0}]")]
    DuplicateSection(String),

    #[error("duplicate option '{key}' in section [{section}]")]
    DuplicateOption { section: String, key: String },

    #[error("expected 'key = value', got '{0}'")]
    MissingDelimiter(String),

    #[error("empty option name")]
    EmptyKey,
}
