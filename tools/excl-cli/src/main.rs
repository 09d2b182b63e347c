//! excl - Rhythm Thief script editor
//!
//! Inspects and edits EXCL script files (`.bin`) from the command line.
//!
//! # Commands
//!
//! - `excl info` - Show header fields and entry count
//! - `excl list` - Print every entry
//! - `excl export` - Write all entries to a text file, one line each
//! - `excl import` - Replace all entries from a text file
//! - `excl set` - Replace a single entry
//! - `excl search` - Find entries containing some text
//! - `excl replace` - Replace text across all entries
//!
//! # Usage
//!
//! ```bash
//! # Translate a script through a text file
//! excl export stage01.bin -o stage01.txt
//! excl import stage01.bin stage01.txt -o stage01_en.bin
//!
//! # Fix a single line in place
//! excl set stage01.bin 12 "Phantom R strikes again!"
//! ```
//!
//! # Config (<config dir>/excl/config.toml)
//!
//! ```toml
//! [export]
//! line_ending = "crlf"   # "lf" (default) or "crlf"
//! extension = "txt"
//!
//! [save]
//! backup = true          # copy the target to <file>.bak before overwriting
//! ```

mod config;
mod edit;
mod inspect;
mod output;
mod text;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// excl - Rhythm Thief script editor
#[derive(Parser)]
#[command(name = "excl")]
#[command(about = "Inspect and edit Rhythm Thief EXCL script files")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/excl/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show header fields and entry count
    Info(inspect::InfoArgs),

    /// Print every entry with its index
    List(inspect::ListArgs),

    /// Export all entries to a text file, one line per entry
    Export(text::ExportArgs),

    /// Replace all entries from a text file with one line per entry
    Import(text::ImportArgs),

    /// Replace the text of a single entry
    Set(edit::SetArgs),

    /// Find entries containing some text
    Search(inspect::SearchArgs),

    /// Replace text across all entries
    Replace(edit::ReplaceArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Info(args) => inspect::info(args),
        Commands::List(args) => inspect::list(args),
        Commands::Export(args) => text::export(args, &config),
        Commands::Import(args) => text::import(args, &config),
        Commands::Set(args) => edit::set(args, &config),
        Commands::Search(args) => inspect::search(args),
        Commands::Replace(args) => edit::replace(args, &config),
    }
}
