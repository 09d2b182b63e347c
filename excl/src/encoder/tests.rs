//! Tests for the EXCL writer

use super::encode;
use crate::decode;
use crate::error::ExclError;
use crate::test_util::{build_script, offsets_of, sample_document, sample_script};
use crate::{HEADER_SIZE, META_A_SIZE, META_B_SIZE};

#[test]
fn test_roundtrip_identity() {
    let data = sample_script();
    let doc = decode(&data).unwrap();
    assert_eq!(encode(&doc).unwrap(), data);
}

#[test]
fn test_roundtrip_identity_with_trailing_bytes() {
    let mut data = sample_script();
    data.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
    let doc = decode(&data).unwrap();
    assert_eq!(encode(&doc).unwrap(), data);
}

#[test]
fn test_trailing_bytes_follow_edited_entries() {
    let mut data = sample_script();
    data.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
    let mut doc = decode(&data).unwrap();
    doc.set_entry_text(0, "Hello").unwrap();

    let out = encode(&doc).unwrap();
    assert_eq!(out.len(), data.len() + 6);
    assert!(out.ends_with(&[b'e', 0, 0, 0, 0xAA, 0xBB, 0xCC, 0xDD]));

    let reread = decode(&out).unwrap();
    assert_eq!(reread.entry(1).unwrap().content(), "Bye");
    assert_eq!(reread.trailing(), &[0xAA, 0xBB, 0xCC, 0xDD]);
}

#[test]
fn test_roundtrip_identity_mixed_scripts() {
    let scripts = [
        build_script(0, 0, &[]),
        build_script(1, 3, &[(0, "")]),
        build_script(
            2,
            6,
            &[(0x1C0, "ラファエル"), (0x230, ""), (0x2A8, "🎵 Allegro"), (7, "end")],
        ),
    ];
    for data in scripts {
        let doc = decode(&data).unwrap();
        assert_eq!(encode(&doc).unwrap(), data);
    }
}

#[test]
fn test_grow_first_entry_shifts_later_offsets() {
    let mut doc = sample_document();
    doc.set_entry_text(0, "Hello").unwrap();

    let out = encode(&doc).unwrap();
    assert_eq!(offsets_of(&out), vec![100, 206]);
}

#[test]
fn test_grow_last_entry_changes_no_offsets() {
    let mut doc = sample_document();
    doc.set_entry_text(1, "Goodbye for now").unwrap();

    let out = encode(&doc).unwrap();
    assert_eq!(offsets_of(&out), vec![100, 200]);
}

#[test]
fn test_shrink_entry_shifts_later_offsets_down() {
    let data = build_script(0, 0, &[(10, "abcdef"), (40, "x"), (60, "y")]);
    let mut doc = decode(&data).unwrap();
    doc.set_entry_text(0, "ab").unwrap();

    let out = encode(&doc).unwrap();
    assert_eq!(offsets_of(&out), vec![10, 32, 52]);
}

#[test]
fn test_adjustments_accumulate() {
    let data = build_script(0, 0, &[(0, "a"), (100, "b"), (200, "c"), (300, "d")]);
    let mut doc = decode(&data).unwrap();
    doc.set_entry_text(0, "aaaa").unwrap(); // +3 units
    doc.set_entry_text(2, "").unwrap(); // -1 unit

    let out = encode(&doc).unwrap();
    assert_eq!(offsets_of(&out), vec![0, 106, 206, 304]);
}

#[test]
fn test_offsets_use_code_units_not_chars() {
    let mut doc = sample_document();
    // One char, two UTF-16 code units: "Hi" (2) -> "🎵" (2), no shift
    doc.set_entry_text(0, "🎵").unwrap();
    assert_eq!(offsets_of(&encode(&doc).unwrap()), vec![100, 200]);

    // Three chars, four units: +2 units = +4 bytes
    doc.set_entry_text(0, "a🎵b").unwrap();
    assert_eq!(offsets_of(&encode(&doc).unwrap()), vec![100, 204]);
}

#[test]
fn test_edit_preserves_structure() {
    let data = build_script(3, 4, &[(0, "one"), (1, "two"), (2, "three")]);
    let original = decode(&data).unwrap();

    let mut edited = original.clone();
    edited.set_entry_text(1, "a much longer second line").unwrap();
    edited.set_entry_text(2, "").unwrap();

    let reread = decode(&encode(&edited).unwrap()).unwrap();
    assert_eq!(reread.entry_count(), original.entry_count());
    assert_eq!(reread.variant_code(), original.variant_code());
    assert_eq!(reread.header_padding(), original.header_padding());
    assert_eq!(reread.text_color(), original.text_color());
    for (a, b) in reread.entries().iter().zip(original.entries()) {
        assert_eq!(a.meta_a(), b.meta_a());
        assert_eq!(a.meta_b(), b.meta_b());
    }
    assert_eq!(reread.entry(1).unwrap().content(), "a much longer second line");
    assert_eq!(reread.entry(2).unwrap().content(), "");
    assert_eq!(reread.entry(1).unwrap().original_length_units(), 25);
}

#[test]
fn test_single_terminator_per_entry() {
    let mut doc = sample_document();
    doc.set_entry_text(0, "").unwrap();
    doc.set_entry_text(1, "x").unwrap();

    let out = encode(&doc).unwrap();
    let first_text = HEADER_SIZE + 2 * 4 + META_A_SIZE + META_B_SIZE;
    // Empty text is just the terminator
    assert_eq!(&out[first_text..first_text + 2], &[0, 0]);

    let second_text = first_text + 2 + META_A_SIZE + META_B_SIZE;
    assert_eq!(&out[second_text..], &[b'x', 0, 0, 0]);
}

#[test]
fn test_embedded_nul_rejected() {
    let mut doc = sample_document();
    doc.set_entry_text(1, "By\0e").unwrap();
    assert!(matches!(
        encode(&doc),
        Err(ExclError::EmbeddedTerminator { index: 1 })
    ));
}

#[test]
fn test_offset_underflow_rejected() {
    let data = build_script(0, 0, &[(0, "long text"), (2, "x")]);
    let mut doc = decode(&data).unwrap();
    doc.set_entry_text(0, "").unwrap(); // -18 bytes, offset 2 would go negative
    assert!(matches!(
        encode(&doc),
        Err(ExclError::OffsetOverflow {
            index: 1,
            offset: -16
        })
    ));
}

#[test]
fn test_offset_overflow_rejected() {
    let data = build_script(0, 0, &[(0, ""), (u32::MAX, "x")]);
    let mut doc = decode(&data).unwrap();
    doc.set_entry_text(0, "a").unwrap();
    assert!(matches!(
        encode(&doc),
        Err(ExclError::OffsetOverflow { index: 1, .. })
    ));
}
