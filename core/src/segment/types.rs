//! segment/types.rs
//! Decode failures for a single glyph run.

use thiserror::Error;

use crate::constants::GLYPHS_PER_BYTE;
use crate::types::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Fewer than marker + one glyph.
    #[error("glyph run too short: {len} chars")]
    TooShort { len: usize },

    /// Payload after the marker is not made of whole glyph pairs.
    #[error("glyph run has even length {len}; expected marker + glyph pairs")]
    EvenLength { len: usize },

    #[error("glyph run starts with {found:?}, expected marker {expected:?}")]
    MissingMarker { found: char, expected: char },

    /// `position` is the char offset inside the glyph run.
    #[error("unknown glyph {glyph:?} at position {position}")]
    UnknownGlyph { glyph: char, position: usize },
}

impl SegmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentError::UnknownGlyph { .. } => ErrorKind::AlphabetLookup,
            _ => ErrorKind::Structural,
        }
    }
}

/// Glyph count of an encoded word carrying `byte_len` bytes.
#[inline]
pub const fn encoded_len(byte_len: usize) -> usize {
    1 + GLYPHS_PER_BYTE * byte_len
}
