#[cfg(test)]
mod tests {
    use chieru_core::constants::{BANNER, ERROR_SENTINEL};
    use chieru_core::prelude::*;
    use chieru_core::DocumentError;

    fn docs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("doc {i}, 第{i}行！")).collect()
    }

    fn codec(workers: usize) -> ChieruCodec {
        let config = CodecConfig { workers: Some(workers), ..CodecConfig::default() };
        ChieruCodec::new().with_config(config).unwrap()
    }

    #[test]
    fn parallel_encode_preserves_order() {
        let codec = codec(4);
        let input = docs(100);
        let out = encode_batch(&codec, &input);

        let expected: Vec<String> = input.iter().map(|d| codec.encode_text(d)).collect();
        assert_eq!(out.results, expected);

        let snap = out.telemetry.unwrap();
        assert_eq!(snap.counters.documents, 100);
        assert!(snap.sanity_check());
    }

    #[test]
    fn parallel_round_trip() {
        let codec = codec(3);
        let input = docs(37);
        let encoded = encode_batch(&codec, &input).results;
        let decoded: Vec<String> = decode_batch(&codec, &encoded)
            .results
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(decoded, input);
    }

    #[test]
    fn single_worker_matches_pool() {
        let input = docs(20);
        assert_eq!(encode_batch(&codec(1), &input).results, encode_batch(&codec(8), &input).results);
    }

    #[test]
    fn bad_documents_fail_individually() {
        let codec = codec(2);
        let input = vec![
            codec.encode_text("fine"),
            "no banner".to_string(),
            format!("{BANNER}切卟"),
            codec.encode_text("also fine"),
        ];
        let out = decode_batch(&codec, &input);

        assert_eq!(out.results[0].as_deref(), Ok("fine"));
        assert_eq!(out.results[1], Err(DocumentError::MissingBanner));
        assert!(matches!(out.results[2], Err(DocumentError::Segment { .. })));
        assert_eq!(out.results[3].as_deref(), Ok("also fine"));
        // Missing banner and the truncated word.
        assert_eq!(out.telemetry.unwrap().counters.segment_errors, 2);
    }

    #[test]
    fn lossy_batch_uses_sentinel() {
        let config = CodecConfig { decode_policy: DecodePolicy::Lossy, workers: Some(2), telemetry: true };
        let codec = ChieruCodec::new().with_config(config).unwrap();
        let out = decode_batch(&codec, &["plain", "text"]);
        assert!(out.results.iter().all(|r| r.as_deref() == Ok(ERROR_SENTINEL)));
    }

    #[test]
    fn telemetry_can_be_disabled() {
        let config = CodecConfig { telemetry: false, ..CodecConfig::default() };
        let codec = ChieruCodec::new().with_config(config).unwrap();
        let out = encode_batch(&codec, &docs(5));
        assert_eq!(out.results.len(), 5);
        assert!(out.telemetry.is_none());
    }

    #[test]
    fn explicit_profile_overrides_config() {
        let codec = codec(1);
        let input = docs(25);
        let out = encode_batch_with(&codec, &input, &ParallelismProfile::fixed(4));
        assert_eq!(out.results, encode_batch(&codec, &input).results);

        let decoded = decode_batch_with(&codec, &out.results, &ParallelismProfile::single_threaded());
        assert!(decoded.results.iter().zip(&input).all(|(r, d)| r.as_deref() == Ok(d.as_str())));
        assert_eq!(decoded.telemetry.unwrap().counters.documents, 25);
    }

    #[test]
    fn empty_batch() {
        let out = encode_batch::<String>(&codec(4), &[]);
        assert!(out.results.is_empty());
        assert_eq!(out.telemetry.unwrap().counters.documents, 0);
    }
}
