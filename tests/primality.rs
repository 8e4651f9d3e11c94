//! Tests for primality module

use primebench::primality::{count_primes, is_prime};

/// Reference definition: n >= 2 with no divisor in [2, n).
fn is_prime_naive(n: u64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

#[test]
fn test_known_values() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(17));
    assert!(is_prime(97));
    assert!(!is_prime(100));
}

#[test]
fn test_matches_naive_definition() {
    for n in 0..2_000 {
        assert_eq!(is_prime(n), is_prime_naive(n), "disagreement at n={n}");
    }
}

#[test]
fn test_large_primes() {
    // 2^31 - 1 is a Mersenne prime
    assert!(is_prime(2_147_483_647));
    assert!(!is_prime(2_147_483_649));
}

#[test]
fn test_count_primes_small_ranges() {
    // primes below 10: 2, 3, 5, 7
    assert_eq!(count_primes(2..10), 4);
    // primes below 100: 25 of them
    assert_eq!(count_primes(2..100), 25);
    // sub-range [10, 30): 11, 13, 17, 19, 23, 29
    assert_eq!(count_primes(10..30), 6);
}

#[test]
fn test_count_primes_empty_range() {
    assert_eq!(count_primes(2..2), 0);
    assert_eq!(count_primes(0..2), 0);
}

#[test]
fn test_count_splits_like_whole() {
    // Counting over a split range must equal counting the whole range.
    let whole = count_primes(2..1_000);
    let split = count_primes(2..400) + count_primes(400..1_000);
    assert_eq!(whole, split);
}
