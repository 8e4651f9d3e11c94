//! Timed counting passes, sequential and parallel.
//!
//! Each pass counts the primes in `[2, limit)` and reports the count
//! together with the wall-clock time of the whole pass. The parallel
//! pass times the entire region including chunk planning and the final
//! join, matching how an OpenMP `parallel for` would be timed from the
//! outside.

use std::time::Instant;

use rayon::ThreadPoolBuilder;

use crate::error::{PrimeBenchError, Result};
use crate::primality::count_primes;
use crate::schedule::{plan_chunks, ChunkCursor, SchedulePolicy};
use crate::RunResult;

/// Mode label for the sequential baseline row.
pub const SEQUENTIAL_MODE: &str = "secuencial";

/// Run the single-threaded baseline pass.
pub fn run_sequential(limit: u64) -> RunResult {
    let start = Instant::now();
    let prime_count = count_primes(2..limit.max(2));
    let elapsed_secs = start.elapsed().as_secs_f64();

    RunResult {
        mode: SEQUENTIAL_MODE,
        threads: 1,
        elapsed_secs,
        prime_count,
        limit,
    }
}

/// Run one parallel pass under a scheduling policy.
///
/// Builds a dedicated pool of `threads` workers, partitions `[2, limit)`
/// per the policy, and sums per-worker partial counts once every worker
/// has joined. Workers share nothing mutable except the chunk cursor
/// (dynamic policies only); partials are merged after the pass.
pub fn run_parallel(limit: u64, threads: usize, policy: SchedulePolicy) -> Result<RunResult> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|source| PrimeBenchError::ThreadPool { threads, source })?;

    let start = Instant::now();
    let chunks = plan_chunks(2..limit.max(2), threads, policy);

    let partials: Vec<u64> = if policy.is_dynamic() {
        let cursor = ChunkCursor::new(&chunks);
        pool.broadcast(|_| {
            let mut local = 0;
            while let Some(chunk) = cursor.claim() {
                local += count_primes(chunk);
            }
            local
        })
    } else {
        pool.broadcast(|ctx| {
            chunks
                .iter()
                .skip(ctx.index())
                .step_by(ctx.num_threads())
                .map(|chunk| count_primes(chunk.clone()))
                .sum()
        })
    };

    let prime_count = partials.iter().sum();
    let elapsed_secs = start.elapsed().as_secs_f64();

    Ok(RunResult {
        mode: policy.mode_label(),
        threads,
        elapsed_secs,
        prime_count,
        limit,
    })
}
