//! chieru-core
//!
//! Reversible glyph text codec.
//! Words become runs of 16 glyphs, separators are kept verbatim.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod config;

// Codec layers (alphabet → segment → document)
pub mod alphabet;
pub mod segment;
pub mod document;
pub mod codec;

// Around the codec
pub mod telemetry;
pub mod batch;
pub mod console;

pub use alphabet::{Alphabet, AlphabetError};
pub use codec::{decode_text, decode_text_lossy, decode_word, encode_text, encode_word, ChieruCodec};
pub use config::{CodecConfig, ConfigError, DecodePolicy};
pub use document::DocumentError;
pub use segment::SegmentError;
pub use types::{ChieruError, ErrorKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::batch::{
        decode_batch, decode_batch_with, encode_batch, encode_batch_with, BatchOutput, ParallelismProfile,
    };
    pub use crate::codec::ChieruCodec;
    pub use crate::config::{CodecConfig, DecodePolicy};
    pub use crate::constants::{BANNER, ERROR_SENTINEL, MARKER};
    pub use crate::types::{ChieruError, ErrorKind};
}
