//! document/classify.rs
//! Separator predicate and the word/separator span splitter.

use crate::constants::SEPARATOR_SYMBOLS;

/// `true` if `ch` is copied verbatim instead of being transcoded.
///
/// Separators are the ASCII chars outside `0-9`, `A-Z`, `a-z` plus the
/// literal CJK punctuation in `SEPARATOR_SYMBOLS`. Everything else, including
/// every other non-ASCII char, belongs to a word.
pub fn is_separator(ch: char) -> bool {
    let c = ch as u32;
    if c < 0x30                          // before '0'
        || (0x3A..=0x40).contains(&c)    // between '9' and 'A'
        || (0x5B..=0x60).contains(&c)    // between 'Z' and 'a'
        || (0x7B..=0x7F).contains(&c)    // after 'z' in ascii
    {
        return true;
    }
    c > 0x7F && SEPARATOR_SYMBOLS.contains(ch)
}

/// One piece of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Maximal non-empty run of word chars; `offset` is its char index.
    Word { text: &'a str, offset: usize },
    Separator(char),
}

/// Iterator over the spans of a document, left to right.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Spans<'a> {
    /// `base_offset` is the char index of `text` within the full document.
    pub fn new(text: &'a str, base_offset: usize) -> Self {
        Self { rest: text, offset: base_offset }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;

        if is_separator(first) {
            self.rest = &self.rest[first.len_utf8()..];
            self.offset += 1;
            return Some(Span::Separator(first));
        }

        let mut chars = 0usize;
        let mut end = self.rest.len();
        for (i, ch) in self.rest.char_indices() {
            if is_separator(ch) {
                end = i;
                break;
            }
            chars += 1;
        }

        let text = &self.rest[..end];
        let offset = self.offset;
        self.rest = &self.rest[end..];
        self.offset += chars;
        Some(Span::Word { text, offset })
    }
}

/// Split `text` into spans.
pub fn spans(text: &str) -> Spans<'_> {
    Spans::new(text, 0)
}
