//! document/decode.rs
//!
//! Document decoding.
//!
//! Design notes:
//! - The banner is mandatory; without it nothing is decoded. A missing
//!   banner counts as one segment error under both policies.
//! - Decoded word bytes and separator bytes are accumulated first and turned
//!   into a `String` once, at the end.
//! - `decode_text` stops at the first bad word. `decode_text_lossy` keeps the
//!   older behavior of splicing `ERROR_SENTINEL` in place of each bad word and
//!   carrying on.

use crate::alphabet::Alphabet;
use crate::constants::{BANNER, BANNER_LEN, ERROR_SENTINEL};
use crate::document::classify::{Span, Spans};
use crate::document::types::DocumentError;
use crate::segment::decode_word_into;
use crate::telemetry::TelemetryCounters;

/// Decode a whole document, failing on the first malformed word.
pub fn decode_text(alphabet: &Alphabet, text: &str) -> Result<String, DocumentError> {
    let mut counters = TelemetryCounters::default();
    decode_text_counted(alphabet, text, &mut counters)
}

/// Strict decode, recording counts into `counters`.
pub fn decode_text_counted(
    alphabet: &Alphabet,
    text: &str,
    counters: &mut TelemetryCounters,
) -> Result<String, DocumentError> {
    let Some(body) = text.strip_prefix(BANNER) else {
        counters.add_segment_error();
        return Err(DocumentError::MissingBanner);
    };
    counters.add_document(text.len());

    let mut bytes = Vec::with_capacity(body.len() / 3);
    for span in Spans::new(body, BANNER_LEN) {
        match span {
            Span::Word { text: word, offset } => {
                match decode_word_into(alphabet, word, &mut bytes) {
                    Ok(n) => counters.add_decoded_word(word.chars().count(), n),
                    Err(source) => {
                        counters.add_segment_error();
                        return Err(DocumentError::Segment { offset, source });
                    }
                }
            }
            Span::Separator(ch) => {
                push_char(&mut bytes, ch);
                counters.add_separator();
            }
        }
    }

    let out = String::from_utf8(bytes).map_err(|e| DocumentError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    counters.add_output(out.len());
    tracing::trace!(input_bytes = text.len(), output_bytes = out.len(), "decoded document");
    Ok(out)
}

/// Decode a whole document, never failing.
///
/// - Missing banner → `ERROR_SENTINEL` alone.
/// - Each malformed word → `ERROR_SENTINEL` at its position.
/// - Invalid UTF-8 in the result → U+FFFD replacement chars.
pub fn decode_text_lossy(alphabet: &Alphabet, text: &str) -> String {
    let mut counters = TelemetryCounters::default();
    decode_text_lossy_counted(alphabet, text, &mut counters)
}

/// Lossy decode, recording counts into `counters`.
pub fn decode_text_lossy_counted(
    alphabet: &Alphabet,
    text: &str,
    counters: &mut TelemetryCounters,
) -> String {
    let Some(body) = text.strip_prefix(BANNER) else {
        tracing::warn!("document without banner, nothing decoded");
        counters.add_segment_error();
        return ERROR_SENTINEL.to_string();
    };
    counters.add_document(text.len());

    let mut bytes = Vec::with_capacity(body.len() / 3);
    for span in Spans::new(body, BANNER_LEN) {
        match span {
            Span::Word { text: word, offset } => {
                match decode_word_into(alphabet, word, &mut bytes) {
                    Ok(n) => counters.add_decoded_word(word.chars().count(), n),
                    Err(e) => {
                        tracing::warn!(offset, error = %e, "undecodable word replaced by sentinel");
                        counters.add_segment_error();
                        bytes.extend_from_slice(ERROR_SENTINEL.as_bytes());
                    }
                }
            }
            Span::Separator(ch) => {
                push_char(&mut bytes, ch);
                counters.add_separator();
            }
        }
    }

    let out = String::from_utf8_lossy(&bytes).into_owned();
    counters.add_output(out.len());
    out
}

#[inline]
fn push_char(bytes: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}
