//! agromanagement — configuration bootstrap (library crate).
//!
//! Resolves the package root, builds the path to `config.ini` and loads it
//! into a [`ConfigReader`](config::ConfigReader). Use
//! [`Bootstrap::load`](bootstrap::Bootstrap::load) to pass configuration
//! explicitly, or [`bootstrap::initialize`] for a process-wide handle.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod env;
pub mod output;
pub mod paths;

pub use bootstrap::{Bootstrap, BootstrapError, app_config, initialize, initialize_from_env};
pub use config::{ConfigError, ConfigReader};
