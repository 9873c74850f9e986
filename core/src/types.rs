use std::io;

use thiserror::Error;

use crate::{
    alphabet::AlphabetError,
    config::ConfigError,
    document::DocumentError,
    segment::SegmentError,
};

/// The two failure families of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong length, parity, marker or banner.
    Structural,
    /// A char outside the glyph table where a glyph was expected.
    AlphabetLookup,
}

/// Unified error covering every layer of the crate.
/// - `From<T>` impls enable `?` from alphabet construction up to the console.
#[derive(Debug, Error)]
pub enum ChieruError {
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    #[error("segment error: {0}")]
    Segment(#[from] SegmentError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ChieruError {
    /// Codec failure family, `None` for configuration and I/O errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ChieruError::Alphabet(e) => Some(e.kind()),
            ChieruError::Segment(e) => Some(e.kind()),
            ChieruError::Document(e) => Some(e.kind()),
            ChieruError::Config(_) | ChieruError::Io(_) => None,
        }
    }
}
