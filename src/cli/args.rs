//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use agromanagement::config::Document;
use agromanagement::output::OutputRenderer;

/// Inspect the agromanagement configuration.
#[derive(Parser, Debug)]
#[command(name = agromanagement::constants::APP_NAME, version = agromanagement::constants::VERSION)]
pub struct Cli {
    /// Root directory containing `config.ini` (overrides AGROMANAGEMENT_ROOT_DIR).
    #[arg(long, global = true, value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Join the root directory with the host path separator instead of `\`.
    #[arg(long, global = true, default_value_t = false)]
    pub native_paths: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the computed config file path.
    Path,

    /// Print the whole configuration.
    Show(ShowArgs),

    /// List section names.
    Sections,

    /// Print a single value.
    Get(GetArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Show values as written, without interpolation or inherited defaults.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

/// Arguments for the `get` subcommand.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Section name (case-sensitive).
    pub section: String,

    /// Option name (case-insensitive).
    pub key: String,

    /// Print the value without interpolation.
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Ini,
    Json,
    Toml,
}

impl OutputFormat {
    /// Render the document using the renderer for this format.
    ///
    /// `resolved` says whether `doc` holds interpolated values.
    pub fn render(&self, path: &Path, doc: &Document, resolved: bool) -> String {
        use agromanagement::output;
        match self {
            OutputFormat::Terminal => output::terminal::TerminalRenderer.render(path, doc),
            OutputFormat::Ini => output::ini::IniRenderer { resolved }.render(path, doc),
            OutputFormat::Json => output::json::JsonRenderer.render(path, doc),
            OutputFormat::Toml => output::toml::TomlRenderer.render(path, doc),
        }
    }
}
