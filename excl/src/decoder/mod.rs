//! EXCL file parser

use std::io::Cursor;

use crate::document::{Document, Entry};
use crate::error::ExclError;
use crate::{
    EXCL_MAGIC, HEADER_PADDING_SIZE, META_A_SIZE, META_B_SIZE, TextColor, UNSUPPORTED_VARIANTS,
};

mod helpers;

use helpers::{read_array, read_u32, read_units, remaining};

/// Smallest possible entry: both metadata blocks plus an empty string
const MIN_ENTRY_SIZE: usize = META_A_SIZE + META_B_SIZE + 2;

/// Parse an EXCL file into a Document
///
/// Entries are read back to back after the offset table. The stored offsets
/// are kept for writing but never used to locate entries.
///
/// # Arguments
/// * `data` - Raw file bytes
///
/// # Returns
/// * `Ok(Document)` - Parsed script
/// * `Err(ExclError)` - Parse error; nothing is returned on failure
pub fn decode(data: &[u8]) -> Result<Document, ExclError> {
    let mut cursor = Cursor::new(data);

    // Magic "EXCL" (4 bytes)
    let magic = read_array::<4>(&mut cursor)?;
    if &magic != EXCL_MAGIC {
        return Err(ExclError::InvalidMagic { found: magic });
    }

    // Variant code (4 bytes)
    let variant_code = read_u32(&mut cursor)?;
    if UNSUPPORTED_VARIANTS.contains(&variant_code) {
        return Err(ExclError::UnsupportedVariant(variant_code));
    }

    // Padding (12 bytes) - kept verbatim
    let header_padding = read_array::<HEADER_PADDING_SIZE>(&mut cursor)?;

    // Text color (4 bytes)
    let text_color = TextColor::try_from(read_u32(&mut cursor)?)?;

    // Entry count (4 bytes)
    let entry_count = read_u32(&mut cursor)? as usize;

    // Offset table
    let mut entry_offsets = Vec::with_capacity(entry_count.min(remaining(&cursor) / 4));
    for _ in 0..entry_count {
        entry_offsets.push(read_u32(&mut cursor)?);
    }

    // Entries
    let mut entries = Vec::with_capacity(entry_count.min(remaining(&cursor) / MIN_ENTRY_SIZE));
    for index in 0..entry_count {
        let meta_a = read_array::<META_A_SIZE>(&mut cursor)?;
        let meta_b = read_array::<META_B_SIZE>(&mut cursor)?;

        let units = read_units(&mut cursor)?;
        let content = String::from_utf16(&units).map_err(|_| ExclError::InvalidText { index })?;

        entries.push(Entry {
            meta_a,
            meta_b,
            content,
            original_length_units: units.len(),
        });
    }

    // Anything after the last entry is kept opaque and written back as is
    let trailing = data[cursor.position() as usize..].to_vec();
    if !trailing.is_empty() {
        tracing::debug!("{} trailing bytes after last entry", trailing.len());
    }
    tracing::debug!(
        variant_code,
        %text_color,
        entry_count,
        "decoded EXCL script"
    );

    Ok(Document {
        variant_code,
        header_padding,
        text_color,
        entry_offsets,
        entries,
        trailing,
        modified: false,
    })
}
