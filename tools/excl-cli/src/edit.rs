//! Editing commands: set, replace

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::output;

/// Arguments for the set command
#[derive(Args)]
pub struct SetArgs {
    /// Script file (.bin)
    pub file: PathBuf,

    /// Entry index (0-based)
    pub index: usize,

    /// New text for the entry
    pub text: String,

    /// Write the edited script here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the replace command
#[derive(Args)]
pub struct ReplaceArgs {
    /// Script file (.bin)
    pub file: PathBuf,

    /// Text to replace
    pub from: String,

    /// Replacement text
    pub to: String,

    /// Write the edited script here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn set(args: SetArgs, config: &Config) -> Result<()> {
    let mut doc = output::open(&args.file)?;
    doc.set_entry_text(args.index, &args.text)
        .with_context(|| format!("Failed to edit {}", args.file.display()))?;

    output::save(&mut doc, &args.file, args.output.as_deref(), config)?;
    Ok(())
}

pub fn replace(args: ReplaceArgs, config: &Config) -> Result<()> {
    if args.from.is_empty() {
        anyhow::bail!("Nothing to replace: search text is empty");
    }
    if args.from.contains('\n') || args.to.contains('\n') {
        anyhow::bail!("Replacement cannot add or remove line breaks");
    }

    let mut doc = output::open(&args.file)?;
    let changed = doc.replace_all(&args.from, &args.to);
    tracing::info!("Replaced {:?} with {:?} in {} entries", args.from, args.to, changed);

    if changed == 0 {
        println!("Text not found!");
        return Ok(());
    }
    output::save(&mut doc, &args.file, args.output.as_deref(), config)?;
    Ok(())
}
