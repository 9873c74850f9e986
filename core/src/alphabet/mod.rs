//! alphabet/mod.rs
//! The 16-glyph table shared by every codec operation.
//!
//! Design notes:
//! - `forward` (nibble → glyph) and `reverse` (glyph → nibble) are exact inverses.
//! - The built-in table is built once per process and is immutable afterwards.
//! - Custom tables are validated on construction; a table that would make
//!   decoding ambiguous is rejected instead of silently accepted.

pub mod types;
pub mod standard;

pub use types::*;
pub use standard::*;
