// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seating-file decoding.
//!
//! Seating exports arrive in whatever encoding the box-office system
//! produced: UTF-16LE (with or without BOM), UTF-8, or Latin-1. The
//! parser always receives decoded text, so the ladder here never fails;
//! it degrades to Latin-1, which maps every byte to a character.

const BOM_UTF8: [u8; 3] = [0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];

/// Decodes raw seating-file bytes into text.
///
/// Detection order: BOM (UTF-8, UTF-16LE, UTF-16BE), then a zero-byte
/// heuristic for BOM-less UTF-16LE, then UTF-8 validity, then Latin-1.
#[must_use]
pub fn decode_seating_bytes(bytes: &[u8]) -> String {
    if let Some(stripped) = bytes.strip_prefix(&BOM_UTF16_LE) {
        return decode_utf16(stripped, u16::from_le_bytes);
    }
    if let Some(stripped) = bytes.strip_prefix(&BOM_UTF16_BE) {
        return decode_utf16(stripped, u16::from_be_bytes);
    }
    if let Some(stripped) = bytes.strip_prefix(&BOM_UTF8) {
        return String::from_utf8_lossy(stripped).into_owned();
    }
    if looks_utf16_le(bytes) {
        return decode_utf16(bytes, u16::from_le_bytes);
    }
    std::str::from_utf8(bytes).map_or_else(
        |_| bytes.iter().map(|&byte| char::from(byte)).collect(),
        String::from,
    )
}

/// Decodes UTF-16 code units with the given byte order.
///
/// A trailing odd byte is dropped; unpaired surrogates become the
/// replacement character.
fn decode_utf16(bytes: &[u8], combine: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| combine([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Heuristic for BOM-less UTF-16LE.
///
/// Latin-script UTF-16LE text has zero high bytes for nearly every
/// character; a quarter of zeroes at odd offsets in the sample is already
/// far more than any plausible 8-bit export contains.
fn looks_utf16_le(bytes: &[u8]) -> bool {
    let sample: &[u8] = &bytes[..bytes.len().min(256)];
    if sample.len() < 4 {
        return false;
    }
    let odd_zeroes: usize = sample.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();
    let odd_total: usize = sample.len() / 2;
    odd_zeroes * 4 >= odd_total
}
