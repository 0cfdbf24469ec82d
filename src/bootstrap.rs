//! Config bootstrap: compute the config path and load the handle.
//!
//! Two entry points:
//! - [`Bootstrap::load`] returns an owned [`ConfigReader`] for callers that
//!   pass configuration around explicitly (and for tests).
//! - [`initialize`] binds a process-wide handle exactly once and returns it
//!   as `&'static`. Later calls return the same handle without touching the
//!   file system. A failed call binds nothing, so a later call may retry.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, ConfigReader};
use crate::env::Env;
use crate::paths::{self, PathError, PathStyle};

/// Errors from [`initialize_from_env`].
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Where to find `config.ini` and how to join its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    root_dir: PathBuf,
    style: PathStyle,
}

impl Bootstrap {
    /// Bootstrap rooted at `root_dir` with the default path style.
    ///
    /// The root is taken verbatim: it is not checked for being absolute or
    /// non-empty. Use [`from_env`](Self::from_env) or
    /// [`resolve`](Self::resolve) for a validated root.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            style: PathStyle::default(),
        }
    }

    /// Resolve root directory and path style from the environment.
    pub fn from_env(env: &Env) -> Result<Self, PathError> {
        Ok(Self {
            root_dir: paths::root_dir(env)?,
            style: paths::path_style(env),
        })
    }

    /// Resolve with explicit overrides taking precedence over `env`.
    ///
    /// `root_override` is canonicalized, so it may be relative but must
    /// exist. `native_paths` forces [`PathStyle::Native`].
    pub fn resolve(
        env: &Env,
        root_override: Option<&Path>,
        native_paths: bool,
    ) -> Result<Self, PathError> {
        let root_dir = match root_override {
            Some(dir) => std::fs::canonicalize(dir).map_err(|e| PathError::RootNotFound {
                path: dir.to_path_buf(),
                source: e,
            })?,
            None => paths::root_dir(env)?,
        };
        let style = if native_paths {
            PathStyle::Native
        } else {
            paths::path_style(env)
        };
        Ok(Self { root_dir, style })
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// `root_dir` + separator + `config.ini`.
    pub fn config_path(&self) -> String {
        paths::config_path(&self.root_dir.to_string_lossy(), self.style)
    }

    /// Read the configuration file. Every call reads the file again.
    pub fn load(&self) -> Result<ConfigReader, ConfigError> {
        let path = self.config_path();
        debug!(%path, style = %self.style, "loading configuration");
        ConfigReader::open(&path)
    }
}

static APP_CONFIG: OnceLock<ConfigReader> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Load the configuration once and bind it for the rest of the process.
///
/// If a handle is already bound it is returned as-is, even when
/// `bootstrap` points elsewhere.
pub fn initialize(bootstrap: &Bootstrap) -> Result<&'static ConfigReader, ConfigError> {
    if let Some(config) = APP_CONFIG.get() {
        return Ok(config);
    }

    // Serialise first-time loads so concurrent callers read the file once.
    let _guard = INIT_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(config) = APP_CONFIG.get() {
        debug!("configuration already initialized");
        return Ok(config);
    }

    let config = bootstrap.load()?;
    info!(path = %config.path().display(), "configuration initialized");
    Ok(APP_CONFIG.get_or_init(|| config))
}

/// [`initialize`] with root directory and path style taken from `env`.
pub fn initialize_from_env(env: &Env) -> Result<&'static ConfigReader, BootstrapError> {
    let bootstrap = Bootstrap::from_env(env)?;
    Ok(initialize(&bootstrap)?)
}

/// The process-wide handle, if [`initialize`] has succeeded.
pub fn app_config() -> Option<&'static ConfigReader> {
    APP_CONFIG.get()
}
