#[cfg(test)]
mod tests {
    use chieru_core::batch::ParallelismProfile;
    use chieru_core::config::{CodecConfig, ConfigError, DecodePolicy, MAX_WORKERS};

    #[test]
    fn empty_json_gives_defaults() {
        let config = CodecConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.decode_policy, DecodePolicy::Strict);
        assert!(config.telemetry);
    }

    #[test]
    fn full_json_is_parsed() {
        let json = r#"{ "decode_policy": "lossy", "workers": 3, "telemetry": false }"#;
        let config = CodecConfig::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(config.decode_policy, DecodePolicy::Lossy);
        assert_eq!(config.workers, Some(3));
        assert!(!config.telemetry);
        assert_eq!(config.parallelism(), ParallelismProfile::fixed(3));
    }

    #[test]
    fn zero_workers_is_invalid() {
        let err = CodecConfig::from_json_str(r#"{ "workers": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "workers", .. }));
    }

    #[test]
    fn oversized_worker_count_is_invalid() {
        let err = CodecConfig::from_json_str(r#"{ "workers": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "workers", .. }));

        let err = CodecConfig::from_json_str(&format!(r#"{{ "workers": {} }}"#, MAX_WORKERS + 1)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "workers", .. }));

        let config = CodecConfig::from_json_str(&format!(r#"{{ "workers": {MAX_WORKERS} }}"#)).unwrap();
        assert_eq!(config.parallelism().worker_count, MAX_WORKERS);
    }

    #[test]
    fn fixed_profile_saturates_inflight() {
        let profile = ParallelismProfile::fixed(usize::MAX);
        assert_eq!(profile.worker_count, usize::MAX);
        assert_eq!(profile.inflight, usize::MAX);
    }

    #[test]
    fn unknown_fields_and_policies_are_rejected() {
        assert!(matches!(
            CodecConfig::from_json_str(r#"{ "glyphs": "abc" }"#).unwrap_err(),
            ConfigError::Json(_)
        ));
        assert!(matches!(
            CodecConfig::from_json_str(r#"{ "decode_policy": "maybe" }"#).unwrap_err(),
            ConfigError::Json(_)
        ));
    }

    #[test]
    fn config_serializes_back_to_json() {
        let config = CodecConfig { decode_policy: DecodePolicy::Lossy, workers: Some(2), telemetry: true };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""decode_policy":"lossy""#));
    }

    #[test]
    fn dynamic_profile_has_at_least_one_worker() {
        let profile = ParallelismProfile::dynamic(4);
        assert!(profile.worker_count >= 1 && profile.worker_count <= 4);
        assert!(profile.inflight >= profile.worker_count);
        assert_eq!(ParallelismProfile::single_threaded().worker_count, 1);
    }
}
