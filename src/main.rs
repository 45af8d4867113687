//! Scrub - A minimal terminal editor for deleting bytes.
//!
//! # Usage
//!
//! ```bash
//! scrub notes.txt
//! scrub --read-only notes.txt
//! scrub --log-file scrub.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scrub::app::App;
use scrub::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A minimal terminal editor: arrow keys move, Backspace deletes, Esc saves
/// and quits
#[derive(Parser, Debug)]
#[command(name = "scrub", version, about, long_about = None)]
struct Cli {
    /// File to edit (must already exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Open the file read-only; Backspace is ignored and nothing is written
    #[arg(long)]
    read_only: bool,

    /// Hide the status bar on the bottom row
    #[arg(long)]
    no_status: bool,

    /// Write debug logs to a file (also `SCRUB_LOG_FILE`)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // The terminal is in raw mode for the whole session, so file logging is
    // the only way to see anything below warn.
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = effective
        .log_file
        .clone()
        .or_else(|| std::env::var_os("SCRUB_LOG_FILE").map(PathBuf::from));
    init_logging(log_file.as_deref())?;
    tracing::debug!(?effective, file = %cli.file.display(), "starting");

    App::new(cli.file)
        .with_status_visible(!effective.no_status)
        .with_read_only(effective.read_only)
        .run()
        .context("Editing session failed")
}
