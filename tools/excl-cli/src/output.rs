//! Shared open/save helpers for commands that modify a script

use anyhow::{Context, Result};
use excl::Document;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Open a script, naming the file in any error
pub fn open(path: &Path) -> Result<Document> {
    excl::open_document(path).with_context(|| format!("Error loading file: {}", path.display()))
}

/// Path the backup of `path` is written to
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}

/// Save `doc` to `output`, or back over `input` when no output is given
///
/// Unchanged documents are still written so that `-o` always produces a file.
/// Nothing on disk is touched, backup included, if the document fails to encode.
pub fn save(doc: &mut Document, input: &Path, output: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let target = output.unwrap_or(input).to_path_buf();
    let data = excl::encode(doc)
        .with_context(|| format!("Error saving file: {}", target.display()))?;

    if config.save.backup && target.is_file() {
        let backup = backup_path(&target);
        std::fs::copy(&target, &backup)
            .with_context(|| format!("Failed to back up {}", target.display()))?;
        tracing::info!("Backed up {:?} -> {:?}", target, backup);
    }

    std::fs::write(&target, &data)
        .with_context(|| format!("Error saving file: {}", target.display()))?;
    doc.mark_saved();
    tracing::info!("Saved: {:?}", target);
    Ok(target)
}
