//! config.rs
//! Runtime options for codec instances, loadable from JSON.
//!
//! The glyph table, banner and separator set are wire constants; see `constants`.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::batch::ParallelismProfile;

/// What `decode` does with a malformed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Return the first error.
    #[default]
    Strict,
    /// Splice `ERROR_SENTINEL` in place of bad words and keep going.
    Lossy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    pub decode_policy: DecodePolicy,
    /// Batch worker count; `None` sizes the pool from the CPU count.
    pub workers: Option<usize>,
    /// Attach a telemetry snapshot to batch results.
    pub telemetry: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::Strict,
            workers: None,
            telemetry: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Upper bound for the dynamic worker pool.
pub const MAX_DYNAMIC_WORKERS: usize = 64;

/// Upper bound for an explicit `workers` value.
pub const MAX_WORKERS: usize = MAX_DYNAMIC_WORKERS;

impl CodecConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "loaded codec config");
        Ok(config)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: CodecConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        tracing::debug!(?config, "loaded codec config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::Invalid {
                field: "workers",
                reason: "must be at least 1".into(),
            });
        }
        if let Some(n) = self.workers.filter(|&n| n > MAX_WORKERS) {
            return Err(ConfigError::Invalid {
                field: "workers",
                reason: format!("{n} exceeds the limit of {MAX_WORKERS}"),
            });
        }
        Ok(())
    }

    /// Worker pool shape for batch runs.
    pub fn parallelism(&self) -> ParallelismProfile {
        match self.workers {
            Some(n) => ParallelismProfile::fixed(n),
            None => ParallelismProfile::dynamic(MAX_DYNAMIC_WORKERS),
        }
    }
}
