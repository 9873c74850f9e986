//! document/mod.rs
//! Whole-text transcoding.
//!
//! A document is split into alternating word runs and separator chars:
//! - word runs are transcoded one by one through the segment codec,
//! - separators are copied verbatim, never transcoded,
//! - an encoded document always starts with the 4-char banner.

pub mod classify;
pub mod types;
pub mod encode;
pub mod decode;

pub use classify::*;
pub use types::*;
pub use encode::*;
pub use decode::*;
