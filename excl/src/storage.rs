//! Reading and writing scripts on disk

use std::fs;
use std::path::Path;

use crate::document::Document;
use crate::error::ExclError;
use crate::{decode, encode};

/// Read and parse a script file
pub fn open_document(path: impl AsRef<Path>) -> Result<Document, ExclError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    tracing::debug!("read {} bytes from {}", data.len(), path.display());
    decode(&data)
}

/// Serialize a script and write it to `path`
///
/// The file is only opened once encoding has succeeded, so a script that
/// cannot be encoded never truncates an existing file.
pub fn save_document(doc: &mut Document, path: impl AsRef<Path>) -> Result<(), ExclError> {
    let path = path.as_ref();
    let data = encode(doc)?;
    fs::write(path, &data)?;
    doc.mark_saved();
    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
