//! alphabet/standard.rs
//! Process-wide built-in table.
//!
//! `OnceLock` gives the one-time build: readers after the first call take the
//! lock-free path, concurrent first callers block until the single build ends.

use std::sync::{Arc, OnceLock};

use crate::alphabet::types::Alphabet;
use crate::constants::GLYPHS;

static STANDARD: OnceLock<Arc<Alphabet>> = OnceLock::new();

impl Alphabet {
    /// The built-in table, built on first use.
    ///
    /// # Panics
    /// If the compiled-in `GLYPHS` constant is not a valid table. That is a
    /// source error, not something a caller can recover from.
    pub fn standard() -> &'static Alphabet {
        Self::standard_arc().as_ref()
    }

    /// Shared handle to the built-in table, for codec instances.
    pub fn shared() -> Arc<Alphabet> {
        Arc::clone(Self::standard_arc())
    }

    fn standard_arc() -> &'static Arc<Alphabet> {
        STANDARD.get_or_init(|| match Alphabet::new(GLYPHS) {
            Ok(alphabet) => {
                tracing::debug!(glyphs = GLYPHS, "built standard chieru alphabet");
                Arc::new(alphabet)
            }
            Err(e) => panic!("built-in glyph table is malformed: {e}"),
        })
    }
}
