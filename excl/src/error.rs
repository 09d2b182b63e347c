//! Error types for EXCL parsing and writing

use std::io;

use thiserror::Error;

/// Errors that can occur when reading, editing or writing EXCL scripts
#[derive(Debug, Error)]
pub enum ExclError {
    /// First four bytes are not "EXCL"
    #[error("not an EXCL script file (magic {found:02X?})")]
    InvalidMagic { found: [u8; 4] },

    /// Recognized variant marker that this crate does not handle
    #[error("EXCL{0} detected, unsupported EXCL variation")]
    UnsupportedVariant(u32),

    /// Text color value with no mapping
    #[error("invalid text color value {0}")]
    InvalidTextColor(u32),

    /// Buffer ended before a field could be read
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        offset: usize,
        need: usize,
        have: usize,
    },

    /// Entry text is not valid UTF-16
    #[error("entry {index} text is not valid UTF-16")]
    InvalidText { index: usize },

    /// Entry text contains U+0000, which would end the string early on disk
    #[error("entry {index} text contains a NUL character")]
    EmbeddedTerminator { index: usize },

    /// Patched offset no longer fits in the 32-bit offset table
    #[error("entry {index} offset {offset} does not fit in 32 bits")]
    OffsetOverflow { index: usize, offset: i64 },

    /// Replacement text has a different number of lines than the script has entries
    #[error("number of entries cannot be changed: script has {expected}, got {found}")]
    EntryCountMismatch { expected: usize, found: usize },

    /// Entry index past the end of the entry list
    #[error("entry index {index} out of range (script has {count} entries)")]
    EntryIndexOutOfRange { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ExclError {
    /// Whether this error means the input bytes are not a well-formed EXCL file
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic { .. }
                | Self::InvalidTextColor(_)
                | Self::UnexpectedEof { .. }
                | Self::InvalidText { .. }
        )
    }
}
