//! document/encode.rs
//!
//! Document encoding: banner, then every word run transcoded and every
//! separator copied in place. Infallible.

use crate::alphabet::Alphabet;
use crate::constants::BANNER;
use crate::document::classify::{spans, Span};
use crate::segment::{encode_word_into, encoded_len};
use crate::telemetry::TelemetryCounters;

/// Encode a whole document.
pub fn encode_text(alphabet: &Alphabet, text: &str) -> String {
    let mut counters = TelemetryCounters::default();
    encode_text_counted(alphabet, text, &mut counters)
}

/// Encode a whole document, recording word/separator/byte counts.
pub fn encode_text_counted(
    alphabet: &Alphabet,
    text: &str,
    counters: &mut TelemetryCounters,
) -> String {
    // Each input byte becomes 2 glyphs of 3 UTF-8 bytes in the common case.
    let mut out = String::with_capacity(BANNER.len() + encoded_len(text.len()) * 3);
    out.push_str(BANNER);
    counters.add_document(text.len());

    for span in spans(text) {
        match span {
            Span::Word { text: word, .. } => {
                let glyphs = encode_word_into(alphabet, word.as_bytes(), &mut out);
                counters.add_encoded_word(word.len(), glyphs);
            }
            Span::Separator(ch) => {
                out.push(ch);
                counters.add_separator();
            }
        }
    }

    counters.add_output(out.len());
    tracing::trace!(input_bytes = text.len(), output_bytes = out.len(), "encoded document");
    out
}
