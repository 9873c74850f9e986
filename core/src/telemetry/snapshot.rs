//! telemetry/snapshot.rs
//! Immutable, serializable view of one codec run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: TelemetryCounters,
    /// Glyphs per input byte. Encoding plain ASCII words approaches 2.0.
    pub expansion_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let expansion_ratio = if counters.bytes_in > 0 {
            counters.glyphs as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            expansion_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal consistency:
    /// - every encoded word costs at least one glyph (its marker)
    /// - stage times fit inside the elapsed time
    pub fn sanity_check(&self) -> bool {
        self.counters.glyphs >= self.counters.words() && self.total_stage_time() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
