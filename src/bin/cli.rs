//! primebench CLI - prime-counting loop-scheduling benchmark
//!
//! Usage:
//!   primebench [limit] [threads...] [--output <file>]
//!
//! Runs a sequential prime-counting baseline over [2, limit), then the
//! same count under the static, static-chunk, dynamic and guided
//! scheduling policies at each requested thread count, appending one
//! CSV row per run.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use primebench::{run_benchmark, BenchConfig, TimingTable, DEFAULT_TABLE_PATH};

/// atoi-style parse: non-numeric input maps to 0, which the config
/// sanitization then absorbs like any other out-of-range value.
/// Malformed arguments are substituted, never fatal.
fn lenient_int(s: &str) -> Result<i64, std::convert::Infallible> {
    Ok(s.parse().unwrap_or(0))
}

#[derive(Parser)]
#[command(name = "primebench")]
#[command(about = "Benchmark parallel loop-scheduling policies on prime counting", long_about = None)]
struct Cli {
    /// Exclusive upper bound of the range to test (default 200000000)
    #[arg(allow_negative_numbers = true, value_parser = lenient_int)]
    limit: Option<i64>,

    /// Thread counts to test; non-positive or oversized values are
    /// dropped, defaults to 1 2 4 8
    #[arg(allow_negative_numbers = true, value_parser = lenient_int)]
    threads: Vec<i64>,

    /// Path of the CSV timing table
    #[arg(short, long, default_value = DEFAULT_TABLE_PATH)]
    output: PathBuf,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();
    let config = BenchConfig::from_args(cli.limit, &cli.threads);

    // Persistence failure is the one fatal startup condition: timing
    // data that cannot be written is useless.
    let mut table = match TimingTable::create(&cli.output) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run_benchmark(&config, &mut table) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
