//! segment/mod.rs
//! Word-level transcoding: one byte run ↔ one marker-prefixed glyph run.
//!
//! Wire layout of an encoded word:
//! - 1 marker glyph (`forward[0]`)
//! - 2 glyphs per byte, low nibble first, then high nibble
//!
//! An encoded word therefore always has an odd length of `1 + 2 * bytes`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
