//! EXCL: Rhythm Thief script file parser and writer
//!
//! EXCL files hold the localized lines of a Rhythm Thief script. Each line is
//! stored as two opaque metadata blocks followed by a NUL-terminated UTF-16LE
//! string, and the header carries a table of byte offsets the game uses to
//! find each line. This crate reads such a file into a [`Document`], lets the
//! line texts be edited, and writes it back with the offset table repaired for
//! any change in text length.
//!
//! # Format Overview
//!
//! ```text
//! 0x00  4      magic "EXCL"
//! 0x04  4      variant code (4 and 6 are unsupported variants)
//! 0x08  12     padding (opaque)
//! 0x14  4      text color
//! 0x18  4      entry count N
//! 0x1C  4*N    entry offsets
//! ...          N entries: 0x28 meta A, 0x50 meta B, UTF-16LE text, 0x0000
//! ```
//!
//! All integers are little-endian.
//!
//! # Usage
//!
//! ```ignore
//! use excl::{decode, encode};
//!
//! let data = std::fs::read("script.bin").unwrap();
//! let mut doc = decode(&data).unwrap();
//!
//! doc.set_entry_text(0, "Hello, Phantom R!").unwrap();
//! let out = encode(&doc).unwrap();
//! ```

mod color;
mod decoder;
mod document;
mod encoder;
mod error;
mod storage;

pub use color::TextColor;
pub use decoder::decode;
pub use document::{Document, Entry};
pub use encoder::encode;
pub use error::ExclError;
pub use storage::{open_document, save_document};

/// EXCL magic string
pub const EXCL_MAGIC: &[u8; 4] = b"EXCL";

/// Variant codes that mark other EXCL layouts (EXCL4, EXCL6)
pub const UNSUPPORTED_VARIANTS: [u32; 2] = [4, 6];

/// Size of the opaque header padding after the variant code
pub const HEADER_PADDING_SIZE: usize = 0xC;

/// Size of the fixed header, up to and including the entry count
pub const HEADER_SIZE: usize = 0x1C;

/// Size of the first opaque metadata block of an entry
pub const META_A_SIZE: usize = 0x28;

/// Size of the second opaque metadata block of an entry
pub const META_B_SIZE: usize = 0x50;

/// Text terminator code unit
pub const TEXT_TERMINATOR: u16 = 0x0000;

#[cfg(test)]
pub(crate) mod test_util;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(EXCL_MAGIC.len(), 4);
        assert_eq!(HEADER_SIZE, 4 + 4 + HEADER_PADDING_SIZE + 4 + 4);
        assert_eq!(META_A_SIZE, 40);
        assert_eq!(META_B_SIZE, 80);
    }
}
