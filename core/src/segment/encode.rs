//! segment/encode.rs
//!
//! Word encoding. Infallible: every byte value has a two-glyph form.

use crate::alphabet::Alphabet;
use crate::segment::types::encoded_len;

/// Encode one byte run into a marker-prefixed glyph run.
///
/// An empty run still yields the marker alone.
pub fn encode_word(alphabet: &Alphabet, bytes: &[u8]) -> String {
    // Table glyphs are at most 4 UTF-8 bytes each.
    let mut out = String::with_capacity(encoded_len(bytes.len()) * 4);
    encode_word_into(alphabet, bytes, &mut out);
    out
}

/// Append the glyph run for `bytes` to `out`.
///
/// # Returns
/// Number of glyphs appended (always `1 + 2 * bytes.len()`).
pub fn encode_word_into(alphabet: &Alphabet, bytes: &[u8], out: &mut String) -> usize {
    out.push(alphabet.marker());
    for &b in bytes {
        out.push(alphabet.glyph(b & 0x0F));
        out.push(alphabet.glyph(b >> 4));
    }
    encoded_len(bytes.len())
}
