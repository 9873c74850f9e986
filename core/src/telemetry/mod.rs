//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for codec runs.
//!
//! Notes:
//! - Counters are plain structs owned by one caller or worker; workers merge
//!   them at the end instead of sharing atomics.
//! - Snapshots are immutable and serializable.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
