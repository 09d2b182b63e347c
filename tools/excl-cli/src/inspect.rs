//! Read-only commands: info, list, search

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::output;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs {
    /// Script file (.bin)
    pub file: PathBuf,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Script file (.bin)
    pub file: PathBuf,
}

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Script file (.bin)
    pub file: PathBuf,

    /// Text to look for
    pub needle: String,
}

pub fn info(args: InfoArgs) -> Result<()> {
    let doc = output::open(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Variant:     {}", doc.variant_code());
    println!("Text color:  {}", doc.text_color());
    println!("Entries:     {}", doc.entry_count());
    Ok(())
}

pub fn list(args: ListArgs) -> Result<()> {
    let doc = output::open(&args.file)?;
    let width = doc.entry_count().saturating_sub(1).to_string().len();

    for (index, entry) in doc.entries().iter().enumerate() {
        println!("{:>width$}: {}", index, entry.content());
    }
    Ok(())
}

pub fn search(args: SearchArgs) -> Result<()> {
    let doc = output::open(&args.file)?;
    let hits = doc.search(&args.needle);

    if hits.is_empty() {
        println!("Text not found!");
        return Ok(());
    }

    for index in &hits {
        if let Some(entry) = doc.entry(*index) {
            println!("{}: {}", index, entry.content());
        }
    }
    tracing::info!("{} matching entries", hits.len());
    Ok(())
}
