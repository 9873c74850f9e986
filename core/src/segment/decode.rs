//! segment/decode.rs
//!
//! Word decoding.
//!
//! Design notes:
//! - Structure (length, parity, marker) is checked before any payload is read.
//! - A glyph outside the table aborts the word; nothing partial is kept.

use crate::alphabet::Alphabet;
use crate::segment::types::SegmentError;

/// Decode a marker-prefixed glyph run back into bytes.
///
/// # Returns
/// - `Ok(Vec<u8>)` with one byte per glyph pair.
/// - `Err(SegmentError)` on a structural problem or an unknown glyph.
pub fn decode_word(alphabet: &Alphabet, glyphs: &str) -> Result<Vec<u8>, SegmentError> {
    let mut out = Vec::with_capacity(glyphs.chars().count() / 2);
    decode_word_into(alphabet, glyphs, &mut out)?;
    Ok(out)
}

/// Append the bytes of `glyphs` to `out`.
///
/// On error `out` is left exactly as it was passed in.
///
/// # Returns
/// Number of bytes appended.
pub fn decode_word_into(
    alphabet: &Alphabet,
    glyphs: &str,
    out: &mut Vec<u8>,
) -> Result<usize, SegmentError> {
    check_structure(alphabet, glyphs)?;

    let start = out.len();
    if let Err(e) = decode_pairs(alphabet, glyphs, out) {
        out.truncate(start);
        return Err(e);
    }
    Ok(out.len() - start)
}

fn decode_pairs(alphabet: &Alphabet, glyphs: &str, out: &mut Vec<u8>) -> Result<(), SegmentError> {
    // Position 0 is the marker; payload positions start at 1.
    let mut payload = glyphs.chars().enumerate().skip(1);

    while let Some((i, low)) = payload.next() {
        // Parity was checked, so every low glyph has a high partner.
        let Some((j, high)) = payload.next() else { break };

        let lo = lookup(alphabet, low, i)?;
        let hi = lookup(alphabet, high, j)?;
        out.push(lo | (hi << 4));
    }
    Ok(())
}

fn check_structure(alphabet: &Alphabet, glyphs: &str) -> Result<(), SegmentError> {
    let len = glyphs.chars().count();
    if len < 2 {
        return Err(SegmentError::TooShort { len });
    }
    if len % 2 == 0 {
        return Err(SegmentError::EvenLength { len });
    }

    let marker = alphabet.marker();
    match glyphs.chars().next() {
        Some(first) if first == marker => Ok(()),
        Some(found) => Err(SegmentError::MissingMarker { found, expected: marker }),
        None => Err(SegmentError::TooShort { len }),
    }
}

#[inline]
fn lookup(alphabet: &Alphabet, glyph: char, position: usize) -> Result<u8, SegmentError> {
    alphabet
        .nibble(glyph)
        .ok_or(SegmentError::UnknownGlyph { glyph, position })
}
