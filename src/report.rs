//! Timing table output and console progress lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::counter::SEQUENTIAL_MODE;
use crate::error::{PrimeBenchError, Result};
use crate::schedule::SchedulePolicy;
use crate::RunResult;

/// Default file name for the timing table.
pub const DEFAULT_TABLE_PATH: &str = "tiempos_openmp.csv";

/// Header row, written once at creation.
pub const TABLE_HEADER: &str = "modo,hilos,tiempo_seg,primos,limite";

/// Append-only CSV table of benchmark rows.
///
/// The file is truncated at creation and every row is flushed as it is
/// appended, so a crash mid-benchmark leaves a syntactically valid
/// partial table. The table is only ever written from the main control
/// flow, after a pass has fully joined; no locking needed.
pub struct TimingTable {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl TimingTable {
    /// Create the table at `path`, truncating any prior contents and
    /// writing the header. Failure here is fatal to the benchmark.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| PrimeBenchError::TableCreate {
            path: path.clone(),
            source,
        })?;
        let mut table = Self {
            path,
            writer: BufWriter::new(file),
        };
        writeln!(table.writer, "{TABLE_HEADER}")?;
        table.writer.flush()?;
        Ok(table)
    }

    /// Append one result row and flush it to disk.
    pub fn record(&mut self, result: &RunResult) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{}",
            result.mode, result.threads, result.elapsed_secs, result.prime_count, result.limit
        )?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Print the console progress line for a finished run.
///
/// Formats match the run kind:
/// `[seq] primos=N tiempo=Ts` for the baseline,
/// `[omp <policy>] h=H [chunk=C] primos=N tiempo=Ts` for parallel runs.
pub fn print_run(result: &RunResult, policy: Option<SchedulePolicy>) {
    if result.mode == SEQUENTIAL_MODE {
        println!(
            "[seq] primos={} tiempo={}s",
            result.prime_count, result.elapsed_secs
        );
        return;
    }
    let tag = policy.map(|p| p.console_tag()).unwrap_or(result.mode);
    match policy.and_then(|p| p.chunk_size()) {
        Some(chunk) => println!(
            "[{tag}] h={} chunk={chunk} primos={} tiempo={}s",
            result.threads, result.prime_count, result.elapsed_secs
        ),
        None => println!(
            "[{tag}] h={} primos={} tiempo={}s",
            result.threads, result.prime_count, result.elapsed_secs
        ),
    }
}
