//! Tests for configuration sanitization

use primebench::{
    BenchConfig, DEFAULT_LIMIT, DEFAULT_THREAD_COUNTS, FALLBACK_LIMIT, MAX_THREAD_COUNT,
};

#[test]
fn test_defaults_when_nothing_given() {
    let config = BenchConfig::from_args(None, &[]);
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert_eq!(config.thread_counts, DEFAULT_THREAD_COUNTS.to_vec());
}

#[test]
fn test_limit_below_minimum_falls_back() {
    let config = BenchConfig::from_args(Some(5), &[]);
    assert_eq!(config.limit, FALLBACK_LIMIT);

    let config = BenchConfig::from_args(Some(0), &[]);
    assert_eq!(config.limit, FALLBACK_LIMIT);
}

#[test]
fn test_negative_limit_falls_back() {
    // atoi-style CLI parsing can hand a negative or zero limit through
    let config = BenchConfig::from_args(Some(-5), &[]);
    assert_eq!(config.limit, FALLBACK_LIMIT);
}

#[test]
fn test_limit_at_minimum_kept() {
    let config = BenchConfig::from_args(Some(10), &[]);
    assert_eq!(config.limit, 10);
}

#[test]
fn test_non_positive_threads_dropped() {
    let config = BenchConfig::from_args(None, &[0, -3, 2]);
    assert_eq!(config.thread_counts, vec![2]);
}

#[test]
fn test_all_invalid_threads_fall_back_to_defaults() {
    let config = BenchConfig::from_args(None, &[0, -1, -8]);
    assert_eq!(config.thread_counts, DEFAULT_THREAD_COUNTS.to_vec());
}

#[test]
fn test_oversized_threads_dropped() {
    // An absurd request must never reach the pool builder
    let config = BenchConfig::from_args(None, &[2, 500_000]);
    assert_eq!(config.thread_counts, vec![2]);
}

#[test]
fn test_all_oversized_threads_fall_back_to_defaults() {
    let config = BenchConfig::from_args(None, &[500_000, 1_000_000]);
    assert_eq!(config.thread_counts, DEFAULT_THREAD_COUNTS.to_vec());
}

#[test]
fn test_thread_cap_boundary_kept() {
    let config = BenchConfig::from_args(None, &[MAX_THREAD_COUNT as i64]);
    assert_eq!(config.thread_counts, vec![MAX_THREAD_COUNT]);

    let config = BenchConfig::from_args(None, &[MAX_THREAD_COUNT as i64 + 1]);
    assert_eq!(config.thread_counts, DEFAULT_THREAD_COUNTS.to_vec());
}

#[test]
fn test_thread_order_preserved() {
    let config = BenchConfig::from_args(None, &[8, 2, 4]);
    assert_eq!(config.thread_counts, vec![8, 2, 4]);
}

#[test]
fn test_default_trait_matches_from_args() {
    assert_eq!(BenchConfig::default(), BenchConfig::from_args(None, &[]));
}
