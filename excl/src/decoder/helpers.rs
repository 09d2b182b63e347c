//! Helper functions for reading binary data

use std::io::Cursor;

use crate::TEXT_TERMINATOR;
use crate::error::ExclError;

/// Bytes left after the cursor
pub(crate) fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let len = cursor.get_ref().len();
    len.saturating_sub(cursor.position() as usize)
}

fn eof(cursor: &Cursor<&[u8]>, need: usize) -> ExclError {
    ExclError::UnexpectedEof {
        offset: cursor.position() as usize,
        need,
        have: remaining(cursor),
    }
}

/// Read a fixed-size block verbatim
pub(crate) fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>) -> Result<[u8; N], ExclError> {
    if remaining(cursor) < N {
        return Err(eof(cursor, N));
    }
    let pos = cursor.position() as usize;
    let mut buf = [0u8; N];
    buf.copy_from_slice(&cursor.get_ref()[pos..pos + N]);
    cursor.set_position((pos + N) as u64);
    Ok(buf)
}

/// Read a 16-bit little-endian integer
pub(crate) fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, ExclError> {
    read_array::<2>(cursor).map(u16::from_le_bytes)
}

/// Read a 32-bit little-endian integer
pub(crate) fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, ExclError> {
    read_array::<4>(cursor).map(u32::from_le_bytes)
}

/// Read UTF-16LE code units up to and including the terminator
///
/// The terminator is consumed but not returned.
pub(crate) fn read_units(cursor: &mut Cursor<&[u8]>) -> Result<Vec<u16>, ExclError> {
    let mut units = Vec::new();
    loop {
        let unit = read_u16(cursor)?;
        if unit == TEXT_TERMINATOR {
            return Ok(units);
        }
        units.push(unit);
    }
}
