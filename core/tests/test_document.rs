#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use chieru_core::alphabet::Alphabet;
    use chieru_core::constants::{BANNER, BANNER_LEN, ERROR_SENTINEL};
    use chieru_core::document::{self, is_separator, DocumentError};
    use chieru_core::segment::SegmentError;
    use chieru_core::{decode_text, decode_text_lossy, encode_text, encode_word, ErrorKind};

    #[test]
    fn two_words_one_separator() {
        let encoded = encode_text("ab,cd");
        let expected = format!("{BANNER}{},{}", encode_word(b"ab"), encode_word(b"cd"));
        assert_eq!(encoded, expected);
        assert_eq!(decode_text(&encoded).unwrap(), "ab,cd");
    }

    #[test]
    fn empty_document_is_the_banner() {
        assert_eq!(encode_text(""), BANNER);
        assert_eq!(decode_text(BANNER).unwrap(), "");
    }

    #[test]
    fn separator_only_document_is_copied() {
        let text = ",。 ！\n";
        assert_eq!(encode_text(text), format!("{BANNER}{text}"));
        assert_eq!(decode_text(&encode_text(text)).unwrap(), text);
    }

    #[test]
    fn cjk_words_are_encoded_as_utf8_bytes() {
        let encoded = encode_text("你好，世界");
        let expected = format!("{BANNER}{}，{}", encode_word("你好".as_bytes()), encode_word("世界".as_bytes()));
        assert_eq!(encoded, expected);
        assert_eq!(decode_text(&encoded).unwrap(), "你好，世界");
    }

    #[test]
    fn missing_banner_is_rejected() {
        let err = decode_text("hello").unwrap_err();
        assert_eq!(err, DocumentError::MissingBanner);
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(decode_text_lossy("hello"), ERROR_SENTINEL);
    }

    #[test]
    fn strict_decode_reports_bad_word_offset() {
        let text = format!("{BANNER}{},切卟", encode_word(b"A"));
        let err = decode_text(&text).unwrap_err();
        assert_eq!(
            err,
            DocumentError::Segment { offset: BANNER_LEN + 4, source: SegmentError::EvenLength { len: 2 } }
        );
    }

    #[test]
    fn unknown_glyph_keeps_lookup_kind() {
        let err = decode_text(&format!("{BANNER}切x卟")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlphabetLookup);
    }

    #[test]
    fn lossy_decode_splices_sentinel_and_continues() {
        let text = format!("{BANNER}{},bad {}", encode_word(b"A"), encode_word(b"z"));
        assert_eq!(decode_text_lossy(&text), format!("A,{ERROR_SENTINEL} z"));
    }

    #[test]
    fn invalid_utf8_is_an_error_in_strict_mode() {
        let text = format!("{BANNER}{}", encode_word(&[0xFF]));
        assert_eq!(decode_text(&text).unwrap_err(), DocumentError::InvalidUtf8 { valid_up_to: 0 });
        assert_eq!(decode_text_lossy(&text), "\u{FFFD}");
    }

    #[test]
    fn custom_alphabet_keeps_the_banner() {
        let a = Alphabet::new("0123456789abcdef").unwrap();
        let encoded = document::encode_text(&a, "A b");
        assert_eq!(encoded, format!("{BANNER}014 026"));
        assert_eq!(document::decode_text(&a, &encoded).unwrap(), "A b");
    }

    proptest! {
        #[test]
        fn prop_document_round_trip(text in ".*") {
            prop_assert_eq!(decode_text(&encode_text(&text)).unwrap(), text);
        }

        #[test]
        fn prop_mixed_cjk_round_trip(text in "[a-zA-Z0-9 ,.!?，。！？～中文字♪]{0,64}") {
            prop_assert_eq!(decode_text(&encode_text(&text)).unwrap(), text);
        }

        #[test]
        fn prop_separators_preserved_in_order(text in "[a-z0-9 ,.，。]{0,64}") {
            let encoded = encode_text(&text);
            let body = &encoded[BANNER.len()..];
            let before: String = text.chars().filter(|c| is_separator(*c)).collect();
            let after: String = body.chars().filter(|c| is_separator(*c)).collect();
            prop_assert_eq!(before, after);
        }
    }
}
