//! codec.rs
//! `ChieruCodec`: an alphabet handle plus runtime options, exposing the four
//! codec operations, and free functions bound to the built-in alphabet.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::config::{CodecConfig, ConfigError, DecodePolicy};
use crate::document::{self, DocumentError};
use crate::segment::{self, SegmentError};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

/// Cheap to clone; the alphabet is shared, never copied.
#[derive(Debug, Clone)]
pub struct ChieruCodec {
    alphabet: Arc<Alphabet>,
    config: CodecConfig,
}

impl ChieruCodec {
    /// Codec over the built-in alphabet with default options.
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::shared())
    }

    pub fn with_alphabet(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet, config: CodecConfig::default() }
    }

    pub fn with_config(mut self, config: CodecConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode_word(&self, bytes: &[u8]) -> String {
        segment::encode_word(&self.alphabet, bytes)
    }

    pub fn decode_word(&self, glyphs: &str) -> Result<Vec<u8>, SegmentError> {
        segment::decode_word(&self.alphabet, glyphs)
    }

    pub fn encode_text(&self, text: &str) -> String {
        document::encode_text(&self.alphabet, text)
    }

    /// Strict decode, regardless of the configured policy.
    pub fn decode_text(&self, text: &str) -> Result<String, DocumentError> {
        document::decode_text(&self.alphabet, text)
    }

    pub fn decode_text_lossy(&self, text: &str) -> String {
        document::decode_text_lossy(&self.alphabet, text)
    }

    /// Decode following `config.decode_policy`. The lossy policy never errors.
    pub fn decode_text_with_policy(&self, text: &str) -> Result<String, DocumentError> {
        let mut counters = TelemetryCounters::default();
        self.decode_counted(text, &mut counters)
    }

    pub fn encode_text_with_telemetry(&self, text: &str) -> (String, TelemetrySnapshot) {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Encode, || self.encode_counted(text, &mut counters));
        timer.finish();
        (out, TelemetrySnapshot::from(&counters, &timer))
    }

    pub fn decode_text_with_telemetry(
        &self,
        text: &str,
    ) -> (Result<String, DocumentError>, TelemetrySnapshot) {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Decode, || self.decode_counted(text, &mut counters));
        timer.finish();
        (out, TelemetrySnapshot::from(&counters, &timer))
    }

    pub(crate) fn encode_counted(&self, text: &str, counters: &mut TelemetryCounters) -> String {
        document::encode_text_counted(&self.alphabet, text, counters)
    }

    pub(crate) fn decode_counted(
        &self,
        text: &str,
        counters: &mut TelemetryCounters,
    ) -> Result<String, DocumentError> {
        match self.config.decode_policy {
            DecodePolicy::Strict => document::decode_text_counted(&self.alphabet, text, counters),
            DecodePolicy::Lossy => Ok(document::decode_text_lossy_counted(&self.alphabet, text, counters)),
        }
    }
}

impl Default for ChieruCodec {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Built-in alphabet shortcuts
// ---------------------------------------------------------------------------

/// Encode a document with the built-in alphabet.
pub fn encode_text(text: &str) -> String {
    document::encode_text(Alphabet::standard(), text)
}

/// Strictly decode a document with the built-in alphabet.
pub fn decode_text(text: &str) -> Result<String, DocumentError> {
    document::decode_text(Alphabet::standard(), text)
}

pub fn decode_text_lossy(text: &str) -> String {
    document::decode_text_lossy(Alphabet::standard(), text)
}

pub fn encode_word(bytes: &[u8]) -> String {
    segment::encode_word(Alphabet::standard(), bytes)
}

pub fn decode_word(glyphs: &str) -> Result<Vec<u8>, SegmentError> {
    segment::decode_word(Alphabet::standard(), glyphs)
}
