//! Unified error handling for primebench.
//!
//! Almost nothing in this crate can fail: the compute passes are
//! deterministic and side-effect-free. The two real failure points are
//! opening/writing the timing table and building a rayon pool, and both
//! are surfaced through [`PrimeBenchError`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the benchmark.
#[derive(Debug, Error)]
pub enum PrimeBenchError {
    /// The timing table could not be created at the requested path.
    ///
    /// This is the only fatal startup condition: timing data without
    /// persistence is useless, so the runner refuses to start.
    #[error("cannot create timing table at {path}: {source}")]
    TableCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be appended to the timing table.
    #[error("cannot write to timing table: {0}")]
    TableWrite(#[from] std::io::Error),

    /// The worker pool for a parallel pass could not be built.
    #[error("cannot build thread pool with {threads} threads: {source}")]
    ThreadPool {
        threads: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PrimeBenchError>;
