//! In-memory EXCL script
//!
//! A [`Document`] is produced by [`crate::decode`] and consumed by
//! [`crate::encode`]. The entry list keeps its decoded length and order for the
//! life of the document; only entry texts can change.

use crate::error::ExclError;
use crate::{HEADER_PADDING_SIZE, META_A_SIZE, META_B_SIZE, TextColor};

/// One localized line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) meta_a: [u8; META_A_SIZE],
    pub(crate) meta_b: [u8; META_B_SIZE],
    pub(crate) content: String,
    /// UTF-16 code units the text occupied when the file was read
    pub(crate) original_length_units: usize,
}

impl Entry {
    /// First opaque metadata block (0x28 bytes)
    pub fn meta_a(&self) -> &[u8; META_A_SIZE] {
        &self.meta_a
    }

    /// Second opaque metadata block (0x50 bytes)
    pub fn meta_b(&self) -> &[u8; META_B_SIZE] {
        &self.meta_b
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn original_length_units(&self) -> usize {
        self.original_length_units
    }

    /// Current text length in UTF-16 code units
    pub fn length_units(&self) -> usize {
        self.content.encode_utf16().count()
    }

    /// Byte delta the current text adds to every following entry's offset
    pub(crate) fn byte_delta(&self) -> i64 {
        (self.length_units() as i64 - self.original_length_units as i64) * 2
    }
}

/// A parsed EXCL script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) variant_code: u32,
    pub(crate) header_padding: [u8; HEADER_PADDING_SIZE],
    pub(crate) text_color: TextColor,
    /// Offsets as stored in the file; one per entry
    pub(crate) entry_offsets: Vec<u32>,
    pub(crate) entries: Vec<Entry>,
    /// Bytes after the last entry; never interpreted
    pub(crate) trailing: Vec<u8>,
    pub(crate) modified: bool,
}

impl Document {
    pub fn variant_code(&self) -> u32 {
        self.variant_code
    }

    pub fn header_padding(&self) -> &[u8; HEADER_PADDING_SIZE] {
        &self.header_padding
    }

    pub fn text_color(&self) -> TextColor {
        self.text_color
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Offset table as read from the file (not adjusted for edits)
    pub fn entry_offsets(&self) -> &[u32] {
        &self.entry_offsets
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Bytes found after the last entry, written back unchanged
    pub fn trailing(&self) -> &[u8] {
        &self.trailing
    }

    /// Whether any entry text changed since the document was read or last saved
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after the document has been written out
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Replace the text of one entry
    pub fn set_entry_text(&mut self, index: usize, text: &str) -> Result<(), ExclError> {
        let count = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ExclError::EntryIndexOutOfRange { index, count })?;

        if entry.content != text {
            entry.content = text.to_string();
            self.modified = true;
        }
        Ok(())
    }

    /// Replace every entry's text, one line per entry
    ///
    /// Nothing changes unless `lines` has exactly one item per entry.
    pub fn replace_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), ExclError> {
        if lines.len() != self.entries.len() {
            return Err(ExclError::EntryCountMismatch {
                expected: self.entries.len(),
                found: lines.len(),
            });
        }

        for (entry, line) in self.entries.iter_mut().zip(lines) {
            let line = line.as_ref();
            if entry.content != line {
                entry.content = line.to_string();
                self.modified = true;
            }
        }
        Ok(())
    }

    /// All entry texts joined with `'\n'`, in entry order
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Inverse of [`Document::export_text`]: one `'\n'`-separated line per entry
    pub fn import_text(&mut self, text: &str) -> Result<(), ExclError> {
        let lines: Vec<&str> = text.split('\n').collect();
        self.replace_lines(&lines)
    }

    /// Indices of entries whose text contains `needle`
    pub fn search(&self, needle: &str) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.content.contains(needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Replace `from` with `to` in every entry, returning how many entries changed
    ///
    /// Replacements never span entries; `from` or `to` containing a newline
    /// would, so such a call changes nothing.
    pub fn replace_all(&mut self, from: &str, to: &str) -> usize {
        if from.is_empty() || from.contains('\n') || to.contains('\n') {
            return 0;
        }

        let mut changed = 0;
        for entry in &mut self.entries {
            if entry.content.contains(from) {
                entry.content = entry.content.replace(from, to);
                changed += 1;
            }
        }
        if changed > 0 {
            self.modified = true;
        }
        changed
    }
}
