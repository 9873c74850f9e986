//! constants.rs
//! Wire constants of the chieru text encoding.
//!
//! Every value here is part of the encoded format: changing a single
//! character breaks decoding of all previously produced text.

/// The 16 glyphs, indexed by nibble value (`GLYPHS[n]` encodes nibble `n`).
pub const GLYPHS: &str = "切卟叮咧哔唎啪啰啵嘭噜噼巴拉蹦铃";

/// Number of glyphs in a table (one per nibble value).
pub const GLYPH_COUNT: usize = 16;

/// Prefix of every encoded word. Always `GLYPHS[0]`.
pub const MARKER: char = '切';

/// Prefix of every encoded document.
pub const BANNER: &str = "切噜～♪";

/// Banner length in chars (not bytes).
pub const BANNER_LEN: usize = 4;

/// Full-width / CJK punctuation treated as separators in addition to the
/// ASCII gaps between `0-9`, `A-Z` and `a-z`.
pub const SEPARATOR_SYMBOLS: &str =
    "！￥…（）—【】、；：‘’“”《》，。？～｀＃＄％＾＆＊－＿＝＋［］｛｝＼｜＇＂＜＞／";

/// Text emitted in place of a segment (or a whole document) that cannot be
/// decoded by the lossy decoder.
pub const ERROR_SENTINEL: &str = "{ERROR}";

/// Glyphs emitted per input byte (low nibble, then high nibble).
pub const GLYPHS_PER_BYTE: usize = 2;

/// Console prompt.
pub const PROMPT: &str = ">>";

/// Console command characters.
pub mod commands {
    pub const ENCODE: char = '1';
    pub const DECODE: char = '0';
    pub const QUIT: char = 'q';
}
