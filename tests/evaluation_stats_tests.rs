#![cfg(feature = "dev")]
//! Tests for the order-statistic summaries (median, quantile, MAD, top-k).

use kselect_rs::internals::evaluation::stats::{mad, median, quantile, smallest_k};
use kselect_rs::internals::primitives::errors::SelectError;
use rand::prelude::*;

// ============================================================================
// Median
// ============================================================================

#[test]
fn test_median_odd_length() {
    let mut v = vec![3.0_f64, 1.0, 2.0];
    assert_eq!(median(&mut v), Ok(2.0));

    let mut v = vec![9.0_f64, 1.0, 7.0, 3.0, 5.0];
    assert_eq!(median(&mut v), Ok(5.0));
}

#[test]
fn test_median_even_length_averages() {
    let mut v = vec![4.0_f64, 1.0, 3.0, 2.0];
    assert_eq!(median(&mut v), Ok(2.5));

    let mut v = vec![10.0_f64, 20.0];
    assert_eq!(median(&mut v), Ok(15.0));
}

#[test]
fn test_median_single_and_empty() {
    let mut v = vec![42.0_f64];
    assert_eq!(median(&mut v), Ok(42.0));

    let mut empty: Vec<f64> = vec![];
    assert_eq!(median(&mut empty), Err(SelectError::EmptyInput));
}

#[test]
fn test_median_matches_sorted_reference() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let n = rng.random_range(1..60);
        let v: Vec<f64> = (0..n).map(|_| rng.random_range(-100..100) as f64).collect();

        let mut sorted = v.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        let mut work = v.clone();
        assert_eq!(median(&mut work), Ok(expected));
    }
}

// ============================================================================
// Quantile
// ============================================================================

#[test]
fn test_quantile_endpoints() {
    let mut v = vec![5.0_f64, 1.0, 9.0, 3.0, 7.0];
    assert_eq!(quantile(&mut v, 0.0), Ok(1.0));

    let mut v = vec![5.0_f64, 1.0, 9.0, 3.0, 7.0];
    assert_eq!(quantile(&mut v, 1.0), Ok(9.0));
}

#[test]
fn test_quantile_nearest_rank() {
    // n = 5: q = 0.5 -> rank round(0.5 * 4) = 2.
    let mut v = vec![5.0_f64, 1.0, 9.0, 3.0, 7.0];
    assert_eq!(quantile(&mut v, 0.5), Ok(5.0));

    // q = 0.25 -> rank round(1.0) = 1.
    let mut v = vec![5.0_f64, 1.0, 9.0, 3.0, 7.0];
    assert_eq!(quantile(&mut v, 0.25), Ok(3.0));
}

#[test]
fn test_quantile_clamps_q() {
    let mut v = vec![2.0_f64, 1.0, 3.0];
    assert_eq!(quantile(&mut v, -0.5), Ok(1.0));

    let mut v = vec![2.0_f64, 1.0, 3.0];
    assert_eq!(quantile(&mut v, 2.0), Ok(3.0));
}

// ============================================================================
// MAD
// ============================================================================

#[test]
fn test_mad_constant_slice_is_zero() {
    let mut v = vec![4.2_f64; 17];
    assert_eq!(mad(&mut v), Ok(0.0));
}

#[test]
fn test_mad_known_value() {
    // median = 7, |r - 7| = [6, 5, 2, 0, 2, 3, 1] -> median 2.
    let mut v = vec![1.0_f64, 2.0, 5.0, 7.0, 9.0, 10.0, 8.0];
    assert_eq!(mad(&mut v), Ok(2.0));
}

#[test]
fn test_mad_nonnegative() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let n = rng.random_range(1..40);
        let mut v: Vec<f64> = (0..n).map(|_| rng.random_range(-50..50) as f64).collect();
        let m = mad(&mut v).unwrap();
        assert!(m >= 0.0);
    }
}

#[test]
fn test_mad_empty_input() {
    let mut empty: Vec<f64> = vec![];
    assert_eq!(mad(&mut empty), Err(SelectError::EmptyInput));
}

// ============================================================================
// Top-K
// ============================================================================

#[test]
fn test_smallest_k_basic() {
    let mut v = vec![9, 4, 7, 1, 8, 2, 6];
    let mut front = smallest_k(&mut v, 3).unwrap().to_vec();
    front.sort_unstable();
    assert_eq!(front, [1, 2, 4]);
}

#[test]
fn test_smallest_k_bounds() {
    let mut v = vec![3, 1, 2];
    assert_eq!(smallest_k(&mut v, 0).unwrap(), &[] as &[i32]);

    let mut v = vec![3, 1, 2];
    let mut all = smallest_k(&mut v, 3).unwrap().to_vec();
    all.sort_unstable();
    assert_eq!(all, [1, 2, 3]);

    let mut v = vec![3, 1, 2];
    assert_eq!(
        smallest_k(&mut v, 4),
        Err(SelectError::RankOutOfBounds { k: 4, len: 3 })
    );
}
