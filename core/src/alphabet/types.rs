//! alphabet/types.rs
//! Alphabet table and its validation errors.

use std::collections::HashMap;

use thiserror::Error;

use crate::constants::GLYPH_COUNT;
use crate::document::is_separator;
use crate::types::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("glyph table must have {need} characters, got {have}")]
    WrongLength { have: usize, need: usize },

    #[error("glyph {glyph:?} appears more than once (index {first} and {second})")]
    DuplicateGlyph { glyph: char, first: usize, second: usize },

    #[error("glyph {glyph:?} at index {index} is a separator character")]
    SeparatorGlyph { glyph: char, index: usize },
}

impl AlphabetError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Structural
    }
}

/// Bidirectional nibble ↔ glyph table.
///
/// - `forward[n]` is the glyph for nibble `n`.
/// - `reverse` maps every glyph back to its nibble.
/// - `forward[0]` doubles as the word marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    forward: [char; GLYPH_COUNT],
    reverse: HashMap<char, u8>,
}

impl Alphabet {
    /// Build a table from exactly 16 distinct, non-separator characters.
    ///
    /// # Returns
    /// - `Ok(Alphabet)` when the table is usable for a lossless round trip.
    /// - `Err(AlphabetError)` on wrong length, duplicates or separator glyphs.
    pub fn new(glyphs: &str) -> Result<Self, AlphabetError> {
        let have = glyphs.chars().count();
        if have != GLYPH_COUNT {
            return Err(AlphabetError::WrongLength { have, need: GLYPH_COUNT });
        }

        let mut forward = ['\0'; GLYPH_COUNT];
        let mut reverse = HashMap::with_capacity(GLYPH_COUNT);

        for (index, glyph) in glyphs.chars().enumerate() {
            if is_separator(glyph) {
                return Err(AlphabetError::SeparatorGlyph { glyph, index });
            }
            if let Some(first) = reverse.insert(glyph, index as u8) {
                return Err(AlphabetError::DuplicateGlyph {
                    glyph,
                    first: first as usize,
                    second: index,
                });
            }
            forward[index] = glyph;
        }

        Ok(Self { forward, reverse })
    }

    /// Glyph for the low 4 bits of `nibble`.
    #[inline]
    pub fn glyph(&self, nibble: u8) -> char {
        self.forward[(nibble & 0x0F) as usize]
    }

    /// Nibble value of `glyph`, or `None` if it is not part of the table.
    #[inline]
    pub fn nibble(&self, glyph: char) -> Option<u8> {
        self.reverse.get(&glyph).copied()
    }

    #[inline]
    pub fn marker(&self) -> char {
        self.forward[0]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.reverse.contains_key(&ch)
    }

    pub fn glyphs(&self) -> &[char; GLYPH_COUNT] {
        &self.forward
    }

    /// Number of distinct glyphs in the reverse map; 16 for any valid table.
    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}
