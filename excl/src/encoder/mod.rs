//! EXCL file writer
//!
//! Rebuilds a script from a [`Document`]. Entry texts may have changed
//! length since the file was read, so every stored offset is shifted by the
//! total byte growth of the entries before it.

use crate::document::{Document, Entry};
use crate::error::ExclError;
use crate::{EXCL_MAGIC, HEADER_SIZE, META_A_SIZE, META_B_SIZE, TEXT_TERMINATOR};

#[cfg(test)]
mod tests;

/// Serialize a Document to EXCL bytes
///
/// Every entry is validated before anything is written, so an error never
/// leaves a partially built buffer behind.
pub fn encode(doc: &Document) -> Result<Vec<u8>, ExclError> {
    check_texts(&doc.entries)?;
    let offsets = patch_offsets(&doc.entry_offsets, &doc.entries)?;

    let text_bytes: usize = doc.entries.iter().map(|e| e.length_units() * 2 + 2).sum();
    let mut output = Vec::with_capacity(
        HEADER_SIZE
            + offsets.len() * 4
            + doc.entries.len() * (META_A_SIZE + META_B_SIZE)
            + text_bytes
            + doc.trailing.len(),
    );

    // Header
    output.extend_from_slice(EXCL_MAGIC);
    output.extend_from_slice(&doc.variant_code.to_le_bytes());
    output.extend_from_slice(&doc.header_padding);
    output.extend_from_slice(&doc.text_color.to_u32().to_le_bytes());
    output.extend_from_slice(&(doc.entries.len() as u32).to_le_bytes());

    // Offset table
    for offset in &offsets {
        output.extend_from_slice(&offset.to_le_bytes());
    }

    // Entries
    for entry in &doc.entries {
        write_entry(&mut output, entry);
    }
    output.extend_from_slice(&doc.trailing);

    tracing::debug!(
        entry_count = doc.entries.len(),
        bytes = output.len(),
        "encoded EXCL script"
    );
    Ok(output)
}

/// Reject texts that would end early on disk
fn check_texts(entries: &[Entry]) -> Result<(), ExclError> {
    match entries.iter().position(|e| e.content.contains('\0')) {
        Some(index) => Err(ExclError::EmbeddedTerminator { index }),
        None => Ok(()),
    }
}

/// Shift each stored offset by the byte growth of all earlier entries
///
/// The adjustment for entry `i` is the sum of `(current - original) * 2` over
/// entries `0..i`, so an entry's own length change only moves its successors.
fn patch_offsets(stored: &[u32], entries: &[Entry]) -> Result<Vec<u32>, ExclError> {
    let mut patched = Vec::with_capacity(stored.len());
    let mut adjustment: i64 = 0;

    for (index, (&offset, entry)) in stored.iter().zip(entries).enumerate() {
        let shifted = i64::from(offset) + adjustment;
        let value =
            u32::try_from(shifted).map_err(|_| ExclError::OffsetOverflow { index, offset: shifted })?;
        patched.push(value);
        adjustment += entry.byte_delta();
    }
    Ok(patched)
}

/// Write one entry: both metadata blocks, the text and its terminator
fn write_entry(output: &mut Vec<u8>, entry: &Entry) {
    output.extend_from_slice(&entry.meta_a);
    output.extend_from_slice(&entry.meta_b);
    for unit in entry.content.encode_utf16() {
        output.extend_from_slice(&unit.to_le_bytes());
    }
    output.extend_from_slice(&TEXT_TERMINATOR.to_le_bytes());
}
