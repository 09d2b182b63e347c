//! Script builders shared by unit tests

use crate::{Document, EXCL_MAGIC, META_A_SIZE, META_B_SIZE, decode};

pub(crate) const TEST_PADDING: [u8; 12] = [0xA0, 0xA1, 0xA2, 0xA3, 0, 0, 0, 0, 0xFF, 0xEE, 0, 1];

pub(crate) fn meta_a_for(index: usize) -> [u8; META_A_SIZE] {
    std::array::from_fn(|i| (index * 7 + i) as u8)
}

pub(crate) fn meta_b_for(index: usize) -> [u8; META_B_SIZE] {
    std::array::from_fn(|i| (index * 13 + i * 3) as u8 ^ 0x5A)
}

/// Build raw EXCL bytes from `(stored offset, text)` pairs
pub(crate) fn build_script(variant_code: u32, text_color: u32, entries: &[(u32, &str)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(EXCL_MAGIC);
    out.extend_from_slice(&variant_code.to_le_bytes());
    out.extend_from_slice(&TEST_PADDING);
    out.extend_from_slice(&text_color.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    for (offset, _) in entries {
        out.extend_from_slice(&offset.to_le_bytes());
    }
    for (index, (_, text)) in entries.iter().enumerate() {
        out.extend_from_slice(&meta_a_for(index));
        out.extend_from_slice(&meta_b_for(index));
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out.extend_from_slice(&[0, 0]);
    }
    out
}

/// Two entries, "Hi" at offset 100 and "Bye" at offset 200
pub(crate) fn sample_script() -> Vec<u8> {
    build_script(0, 2, &[(100, "Hi"), (200, "Bye")])
}

pub(crate) fn sample_document() -> Document {
    decode(&sample_script()).unwrap()
}

/// Read the offset table of an encoded script
pub(crate) fn offsets_of(data: &[u8]) -> Vec<u32> {
    let count = u32::from_le_bytes(data[0x18..0x1C].try_into().unwrap()) as usize;
    (0..count)
        .map(|i| {
            let at = 0x1C + i * 4;
            u32::from_le_bytes(data[at..at + 4].try_into().unwrap())
        })
        .collect()
}
