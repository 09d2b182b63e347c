//! Plain-text export and import
//!
//! The text form is one line per entry, in entry order. Import must supply
//! exactly as many lines as the script has entries.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{Config, LineEnding};
use crate::output;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Script file (.bin)
    pub file: PathBuf,

    /// Output text file (defaults to the script path with the export extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the import command
#[derive(Args)]
pub struct ImportArgs {
    /// Script file (.bin)
    pub file: PathBuf,

    /// Text file with one line per entry
    pub text: PathBuf,

    /// Write the edited script here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Render the export text with the configured line ending
pub fn render(doc: &excl::Document, line_ending: LineEnding) -> String {
    let text = doc.export_text();
    match line_ending {
        LineEnding::Lf => text,
        ending => text.replace('\n', ending.as_str()),
    }
}

/// Normalize an imported text file to LF line breaks
pub fn normalize(text: &str) -> String {
    text.strip_prefix('\u{FEFF}')
        .unwrap_or(text)
        .replace("\r\n", "\n")
}

pub fn export(args: ExportArgs, config: &Config) -> Result<()> {
    let doc = output::open(&args.file)?;
    let target = args
        .output
        .unwrap_or_else(|| args.file.with_extension(&config.export.extension));

    tracing::info!("Exporting {:?} -> {:?}", args.file, target);
    std::fs::write(&target, render(&doc, config.export.line_ending))
        .with_context(|| format!("Error exporting file: {}", target.display()))?;
    tracing::info!("Exported {} entries", doc.entry_count());
    Ok(())
}

pub fn import(args: ImportArgs, config: &Config) -> Result<()> {
    let mut doc = output::open(&args.file)?;
    let text = std::fs::read_to_string(&args.text)
        .with_context(|| format!("Error importing file: {}", args.text.display()))?;

    tracing::info!("Importing {:?} into {:?}", args.text, args.file);
    doc.import_text(&normalize(&text))
        .with_context(|| format!("Error importing file: {}", args.text.display()))?;

    output::save(&mut doc, &args.file, args.output.as_deref(), config)?;
    Ok(())
}
