//! Benchmark orchestration.
//!
//! One sequential baseline pass, then four parallel passes (one per
//! scheduling policy) for each requested thread count. Passes never
//! overlap; each is timed and recorded before the next starts.

use crate::counter::{run_parallel, run_sequential};
use crate::error::Result;
use crate::report::{print_run, TimingTable};
use crate::schedule::ALL_POLICIES;
use crate::{BenchConfig, RunResult};

/// Run the full benchmark matrix, recording every row to `table`.
///
/// Returns all results in execution order: the sequential baseline
/// first, then `policies × thread_counts` with policies cycling fastest.
pub fn run_benchmark(config: &BenchConfig, table: &mut TimingTable) -> Result<Vec<RunResult>> {
    let mut results = Vec::with_capacity(1 + ALL_POLICIES.len() * config.thread_counts.len());

    println!("conteo de primos hasta {}", config.limit);

    let baseline = run_sequential(config.limit);
    print_run(&baseline, None);
    table.record(&baseline)?;
    results.push(baseline);

    for &threads in &config.thread_counts {
        for policy in ALL_POLICIES {
            let result = run_parallel(config.limit, threads, policy)?;
            debug_assert_eq!(
                result.prime_count, results[0].prime_count,
                "parallel pass diverged from baseline"
            );
            print_run(&result, Some(policy));
            table.record(&result)?;
            results.push(result);
        }
    }

    println!("datos guardados en {}", table.path().display());
    Ok(results)
}
