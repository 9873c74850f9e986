//! document/types.rs
//! Document-level decode failures.

use thiserror::Error;

use crate::constants::BANNER;
use crate::segment::SegmentError;
use crate::types::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document does not start with banner {:?}", BANNER)]
    MissingBanner,

    /// `offset` is the char index of the failing word in the document.
    #[error("word at char {offset}: {source}")]
    Segment {
        offset: usize,
        #[source]
        source: SegmentError,
    },

    #[error("decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl DocumentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocumentError::Segment { source, .. } => source.kind(),
            _ => ErrorKind::Structural,
        }
    }
}
