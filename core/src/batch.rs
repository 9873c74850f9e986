//! batch.rs
//! Transcode many documents on a small worker pool.
//!
//! Design notes:
//! - Jobs go through a bounded channel so at most `inflight` documents wait
//!   for a worker; results come back tagged with their input index.
//! - Output order always equals input order.
//! - Each worker owns its counters; they are merged once after the join.

use std::time::Instant;

use crossbeam::channel::{bounded, unbounded};

use crate::codec::ChieruCodec;
use crate::document::DocumentError;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

/// Worker pool shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelismProfile {
    pub worker_count: usize,
    pub inflight: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self { worker_count: 1, inflight: 1 }
    }

    pub fn fixed(worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        Self { worker_count, inflight: worker_count.saturating_mul(4) }
    }

    /// One worker per core minus one (leave one core free), capped.
    pub fn dynamic(hard_cap: usize) -> Self {
        let cores = num_cpus::get();
        let worker_count = cores.saturating_sub(1).clamp(1, hard_cap.max(1));
        Self::fixed(worker_count)
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutput<T> {
    /// One entry per input document, same order.
    pub results: Vec<T>,
    /// Present when the codec config enables telemetry.
    pub telemetry: Option<TelemetrySnapshot>,
}

/// Encode every document in `docs` on the pool shape from the codec config.
pub fn encode_batch<S>(codec: &ChieruCodec, docs: &[S]) -> BatchOutput<String>
where
    S: AsRef<str> + Sync,
{
    encode_batch_with(codec, docs, &codec.config().parallelism())
}

/// Decode every document in `docs` under the codec's decode policy, on the
/// pool shape from the codec config.
pub fn decode_batch<S>(codec: &ChieruCodec, docs: &[S]) -> BatchOutput<Result<String, DocumentError>>
where
    S: AsRef<str> + Sync,
{
    decode_batch_with(codec, docs, &codec.config().parallelism())
}

/// `encode_batch` on an explicit pool shape.
pub fn encode_batch_with<S>(
    codec: &ChieruCodec,
    docs: &[S],
    profile: &ParallelismProfile,
) -> BatchOutput<String>
where
    S: AsRef<str> + Sync,
{
    run_batch(codec, docs, profile, |text, counters| {
        codec.encode_counted(text, counters)
    })
}

/// `decode_batch` on an explicit pool shape.
pub fn decode_batch_with<S>(
    codec: &ChieruCodec,
    docs: &[S],
    profile: &ParallelismProfile,
) -> BatchOutput<Result<String, DocumentError>>
where
    S: AsRef<str> + Sync,
{
    run_batch(codec, docs, profile, |text, counters| {
        codec.decode_counted(text, counters)
    })
}

fn run_batch<S, T, F>(
    codec: &ChieruCodec,
    docs: &[S],
    profile: &ParallelismProfile,
    job: F,
) -> BatchOutput<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str, &mut TelemetryCounters) -> T + Sync,
{
    let mut timer = TelemetryTimer::new();
    let started = Instant::now();

    let (results, counters) = if profile.worker_count <= 1 || docs.len() <= 1 {
        let mut counters = TelemetryCounters::default();
        let results = docs.iter().map(|d| job(d.as_ref(), &mut counters)).collect();
        (results, counters)
    } else {
        run_pool(docs, profile, &job)
    };

    timer.add_stage_time(Stage::Batch, started.elapsed());
    timer.finish();

    let telemetry = codec
        .config()
        .telemetry
        .then(|| TelemetrySnapshot::from(&counters, &timer));

    BatchOutput { results, telemetry }
}

fn run_pool<S, T, F>(docs: &[S], profile: &ParallelismProfile, job: &F) -> (Vec<T>, TelemetryCounters)
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str, &mut TelemetryCounters) -> T + Sync,
{
    let workers = profile.worker_count.min(docs.len());
    let (job_tx, job_rx) = bounded::<(usize, &str)>(profile.inflight.max(1));
    let (res_tx, res_rx) = unbounded::<(usize, T)>();

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(docs.len()).collect();
    let mut total = TelemetryCounters::default();

    let scoped = crossbeam::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let res_tx = res_tx.clone();
            handles.push(scope.spawn(move |_| {
                tracing::debug!(worker, "batch worker started");
                let mut counters = TelemetryCounters::default();
                for (index, text) in job_rx.iter() {
                    let out = job(text, &mut counters);
                    if res_tx.send((index, out)).is_err() {
                        break;
                    }
                }
                tracing::debug!(worker, documents = counters.documents, "batch worker finished");
                counters
            }));
        }
        // Workers hold the only remaining receiver/sender clones.
        drop(job_rx);
        drop(res_tx);

        for (index, doc) in docs.iter().enumerate() {
            if job_tx.send((index, doc.as_ref())).is_err() {
                break;
            }
        }
        drop(job_tx);

        for (index, out) in res_rx.iter() {
            slots[index] = Some(out);
        }

        for handle in handles {
            match handle.join() {
                Ok(counters) => total.merge(&counters),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    if let Err(panic) = scoped {
        std::panic::resume_unwind(panic);
    }

    let results: Vec<T> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), docs.len());
    (results, total)
}
