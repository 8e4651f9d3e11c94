//! # primebench
//!
//! Benchmarks the wall-clock cost of counting primes below a limit,
//! comparing a sequential baseline against four parallel loop-scheduling
//! strategies (static, static-with-chunk, dynamic, guided) across a set
//! of thread counts.
//!
//! Each run appends one row to a CSV timing table; the parallel runs are
//! redundant re-computations of the same deterministic count, so the
//! scheduling policy only ever changes the timing, never the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use primebench::{run_parallel, run_sequential, SchedulePolicy};
//!
//! let baseline = run_sequential(10_000);
//! let parallel = run_parallel(10_000, 4, SchedulePolicy::Dynamic).unwrap();
//! assert_eq!(baseline.prime_count, parallel.prime_count);
//! ```

use serde::Serialize;

// Unified error handling
pub mod error;
pub use error::{PrimeBenchError, Result};

// The trial-division workload
pub mod primality;
pub use primality::{count_primes, is_prime};

// Scheduling policies and chunk planning
pub mod schedule;
pub use schedule::{plan_chunks, ChunkCursor, SchedulePolicy, ALL_POLICIES};

// Timed sequential/parallel counting passes
pub mod counter;
pub use counter::{run_parallel, run_sequential, SEQUENTIAL_MODE};

// CSV table and console output
pub mod report;
pub use report::{TimingTable, DEFAULT_TABLE_PATH, TABLE_HEADER};

// Full benchmark orchestration
pub mod runner;
pub use runner::run_benchmark;

/// Default limit when none is given on the command line.
pub const DEFAULT_LIMIT: u64 = 200_000_000;
/// Smallest limit accepted before the fallback kicks in.
pub const MIN_LIMIT: u64 = 10;
/// Substitute limit used when the requested one is below [`MIN_LIMIT`].
pub const FALLBACK_LIMIT: u64 = 1_000_000;
/// Thread counts tested when none are given on the command line.
pub const DEFAULT_THREAD_COUNTS: [usize; 4] = [1, 2, 4, 8];
/// Largest accepted thread-count request. Anything above this would
/// spend the whole benchmark building a pool; it is dropped like a
/// non-positive count.
pub const MAX_THREAD_COUNT: usize = 512;

// ============================================================================
// Core Types
// ============================================================================

/// One benchmark run's measurements, as written to the timing table.
///
/// Immutable once produced; the runner appends these in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Mode label: `secuencial` or one of the `omp_*` policy labels.
    pub mode: &'static str,
    /// Worker count for the pass (always 1 for the baseline).
    pub threads: usize,
    /// Wall-clock seconds for the whole pass, planning included.
    pub elapsed_secs: f64,
    /// Primes found in `[2, limit)`.
    pub prime_count: u64,
    /// Exclusive upper bound of the tested range.
    pub limit: u64,
}

/// Benchmark configuration, read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Exclusive upper bound of the range to test.
    pub limit: u64,
    /// Thread counts to run the parallel passes at, in order.
    pub thread_counts: Vec<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Build a config from raw command-line values, sanitizing rather
    /// than rejecting.
    ///
    /// A missing limit takes [`DEFAULT_LIMIT`]; a limit below
    /// [`MIN_LIMIT`] (negatives included) is replaced with
    /// [`FALLBACK_LIMIT`] and a warning is logged. Thread counts that
    /// are non-positive or above [`MAX_THREAD_COUNT`] are dropped; if
    /// none survive (or none were given), [`DEFAULT_THREAD_COUNTS`] is
    /// used.
    pub fn from_args(limit: Option<i64>, threads: &[i64]) -> Self {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(l) if l < MIN_LIMIT as i64 => {
                log::warn!("limite muy chico ({l}), usando {FALLBACK_LIMIT}");
                FALLBACK_LIMIT
            }
            Some(l) => l as u64,
        };

        let mut thread_counts: Vec<usize> = threads
            .iter()
            .filter_map(|&t| {
                if t <= 0 {
                    None
                } else if t as usize > MAX_THREAD_COUNT {
                    log::warn!("hilos fuera de rango ({t}), descartado");
                    None
                } else {
                    Some(t as usize)
                }
            })
            .collect();
        if thread_counts.is_empty() {
            thread_counts = DEFAULT_THREAD_COUNTS.to_vec();
        }

        Self {
            limit,
            thread_counts,
        }
    }
}
