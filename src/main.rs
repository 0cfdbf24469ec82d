//! agromanagement — configuration inspection CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use agromanagement::Bootstrap;
use agromanagement::config::ConfigReader;
use agromanagement::constants;
use agromanagement::env::Env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command, GetArgs, ShowArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bootstrap = Bootstrap::resolve(&Env::real(), cli.root_dir.as_deref(), cli.native_paths)
        .context("failed to resolve root directory")?;

    match cli.command {
        Command::Path => run_path(&bootstrap),
        Command::Show(args) => run_show(load(&bootstrap)?, &args),
        Command::Sections => run_sections(load(&bootstrap)?),
        Command::Get(args) => run_get(load(&bootstrap)?, &args),
    }
}

/// Install the fmt subscriber. `AGROMANAGEMENT_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Bind the process-wide configuration handle.
fn load(bootstrap: &Bootstrap) -> Result<&'static ConfigReader> {
    agromanagement::initialize(bootstrap).with_context(|| {
        format!(
            "failed to load configuration from {}",
            bootstrap.config_path()
        )
    })
}

fn run_path(bootstrap: &Bootstrap) -> Result<()> {
    println!("{}", bootstrap.config_path());
    Ok(())
}

fn run_show(config: &ConfigReader, args: &ShowArgs) -> Result<()> {
    let resolved = !args.raw;
    let doc = config
        .document(resolved)
        .context("failed to resolve configuration values")?;
    print!("{}", args.format.render(config.path(), &doc, resolved));
    Ok(())
}

fn run_sections(config: &ConfigReader) -> Result<()> {
    for name in config.sections() {
        println!("{name}");
    }
    Ok(())
}

fn run_get(config: &ConfigReader, args: &GetArgs) -> Result<()> {
    let value = if args.raw {
        config.get_raw(&args.section, &args.key)?.to_string()
    } else {
        config.get(&args.section, &args.key)?
    };
    println!("{value}");
    Ok(())
}
