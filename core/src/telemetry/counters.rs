//! telemetry/counters.rs
//! Mutable counters collected while transcoding documents.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of a run.
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Deterministic counters collected during encode/decode.
#[derive(Default, Clone, Debug, Encode, Decode, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub documents: u64,
    pub words_encoded: u64,
    pub words_decoded: u64,
    pub separators_copied: u64,
    /// UTF-8 bytes of the input documents.
    pub bytes_in: u64,
    /// UTF-8 bytes of the produced documents.
    pub bytes_out: u64,
    /// Glyphs produced (encode) or consumed (decode), markers included.
    pub glyphs: u64,
    pub segment_errors: u64,
}

impl TelemetryCounters {
    pub fn add_document(&mut self, input_len: usize) {
        self.documents += 1;
        self.bytes_in += input_len as u64;
    }

    /// Record one encoded word.
    ///
    /// - `byte_len`: raw bytes of the word
    /// - `glyph_count`: glyphs emitted for it, marker included
    pub fn add_encoded_word(&mut self, byte_len: usize, glyph_count: usize) {
        debug_assert_eq!(glyph_count, 1 + 2 * byte_len);
        self.words_encoded += 1;
        self.glyphs += glyph_count as u64;
    }

    /// Record one decoded word.
    ///
    /// - `glyph_count`: glyphs consumed, marker included
    /// - `byte_len`: bytes recovered
    pub fn add_decoded_word(&mut self, glyph_count: usize, byte_len: usize) {
        debug_assert_eq!(glyph_count, 1 + 2 * byte_len);
        self.words_decoded += 1;
        self.glyphs += glyph_count as u64;
    }

    pub fn add_separator(&mut self) {
        self.separators_copied += 1;
    }

    pub fn add_segment_error(&mut self) {
        self.segment_errors += 1;
    }

    pub fn add_output(&mut self, output_len: usize) {
        self.bytes_out += output_len as u64;
    }

    pub fn words(&self) -> u64 {
        self.words_encoded + self.words_decoded
    }

    // Workers each own a copy and merge once at the end:
    // no locks or atomics inside the hot loop.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.documents += other.documents;
        self.words_encoded += other.words_encoded;
        self.words_decoded += other.words_decoded;
        self.separators_copied += other.separators_copied;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.glyphs += other.glyphs;
        self.segment_errors += other.segment_errors;
    }

    /// Compact binary form (bincode, standard config).
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (counters, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(counters)
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
