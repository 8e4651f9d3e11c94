//! Trial-division primality testing.
//!
//! This is the benchmark workload: a deliberately naive odd-divisor
//! trial division. Cost grows with sqrt(n), which makes the iteration
//! space unevenly expensive and gives the scheduling policies something
//! to balance.

use std::ops::Range;

/// Returns whether `n` is prime, by trial division over odd candidates.
///
/// Pure and lock-free; safe to call concurrently from any number of
/// threads.
///
/// # Example
/// ```
/// use primebench::primality::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3;
    // d <= n / d avoids the d * d overflow near u64::MAX
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Count the primes in a half-open range.
///
/// Shared by the sequential pass and by every parallel worker: each
/// worker applies this to its claimed sub-ranges and the partial counts
/// are summed afterwards.
pub fn count_primes(range: Range<u64>) -> u64 {
    range.filter(|&n| is_prime(n)).count() as u64
}
