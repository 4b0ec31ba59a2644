#![cfg(feature = "dev")]
//! Tests for in-place range partitioning.
//!
//! Covers the resting-index contract, subrange isolation, duplicate-heavy
//! inputs (the original-index tie-break is validated here rather than
//! assumed correct by inspection), and determinism.

use kselect_rs::internals::algorithms::partition::partition_by;
use rand::prelude::*;

fn less(a: &i32, b: &i32) -> bool {
    a < b
}

/// Assert the partition postcondition around resting index `m`.
fn assert_partitioned(v: &[i32], start: usize, end: usize, m: usize) {
    for i in start..m {
        assert!(v[i] <= v[m], "v[{}]={} > pivot v[{}]={}", i, v[i], m, v[m]);
    }
    for i in (m + 1)..end {
        assert!(v[i] >= v[m], "v[{}]={} < pivot v[{}]={}", i, v[i], m, v[m]);
    }
}

// ============================================================================
// Basic Contract
// ============================================================================

#[test]
fn test_partition_single_element() {
    let mut v = [42];
    let m = partition_by(&mut v, 0, 1, 0, &mut less);
    assert_eq!(m, 0);
    assert_eq!(v, [42]);
}

#[test]
fn test_partition_two_elements() {
    let mut v = [2, 1];
    let m = partition_by(&mut v, 0, 2, 0, &mut less);
    assert_eq!(v[m], 2);
    assert_partitioned(&v, 0, 2, m);

    let mut v = [1, 2];
    let m = partition_by(&mut v, 0, 2, 1, &mut less);
    assert_eq!(v[m], 2);
    assert_eq!(m, 1);
}

#[test]
fn test_partition_pivot_is_minimum() {
    let mut v = [5, 9, 1, 7, 3];
    let m = partition_by(&mut v, 0, 5, 2, &mut less);
    assert_eq!(m, 0);
    assert_eq!(v[m], 1);
    assert_partitioned(&v, 0, 5, m);
}

#[test]
fn test_partition_pivot_is_maximum() {
    let mut v = [5, 9, 1, 7, 3];
    let m = partition_by(&mut v, 0, 5, 1, &mut less);
    assert_eq!(m, 4);
    assert_eq!(v[m], 9);
    assert_partitioned(&v, 0, 5, m);
}

#[test]
fn test_partition_preserves_multiset() {
    let mut v = [5, 3, 8, 1, 9, 2, 7];
    let mut expected = v;
    expected.sort_unstable();

    let m = partition_by(&mut v, 0, 7, 3, &mut less);
    assert_partitioned(&v, 0, 7, m);

    let mut sorted = v;
    sorted.sort_unstable();
    assert_eq!(sorted, expected);
}

// ============================================================================
// Subrange Isolation
// ============================================================================

/// Elements outside [start, end) are never moved.
#[test]
fn test_partition_subrange_untouched() {
    let mut v = [100, 5, 3, 8, 2, 7, 100];
    let m = partition_by(&mut v, 1, 6, 3, &mut less);

    assert_eq!(v[0], 100);
    assert_eq!(v[6], 100);
    assert!((1..6).contains(&m));
    assert_partitioned(&v, 1, 6, m);
}

// ============================================================================
// Duplicates and Tie-Breaking
// ============================================================================

/// All-equal input terminates and yields a valid split.
#[test]
fn test_partition_all_equal() {
    let mut v = [3; 9];
    let m = partition_by(&mut v, 0, 9, 4, &mut less);
    assert!(m < 9);
    assert_partitioned(&v, 0, 9, m);
}

/// All-equal input splits near the pivot's original position rather than
/// degenerating to one end.
#[test]
fn test_partition_all_equal_balanced() {
    let mut v = [7; 101];
    let m = partition_by(&mut v, 0, 101, 50, &mut less);
    assert!(
        (25..=75).contains(&m),
        "all-equal split collapsed to index {}",
        m
    );
}

/// Heavy duplicate clustering: random inputs from a tiny alphabet, every
/// possible pivot position. Exercises the original-index tie-break paths.
#[test]
fn test_partition_duplicate_clusters() {
    let mut rng = StdRng::seed_from_u64(0xD0);
    for _ in 0..200 {
        let n = rng.random_range(1..40);
        let v: Vec<i32> = (0..n).map(|_| rng.random_range(0..3)).collect();

        for p in 0..n {
            let mut w = v.clone();
            let m = partition_by(&mut w, 0, n, p, &mut less);
            assert!(m < n);
            assert_partitioned(&w, 0, n, m);

            let mut sorted = w.clone();
            sorted.sort_unstable();
            let mut expected = v.clone();
            expected.sort_unstable();
            assert_eq!(sorted, expected);
        }
    }
}

/// Same input, same pivot index: identical output permutation.
#[test]
fn test_partition_deterministic() {
    let v = [2, 1, 2, 0, 2, 2, 1, 2, 0, 2];
    let mut a = v;
    let mut b = v;
    let ma = partition_by(&mut a, 0, 10, 4, &mut less);
    let mb = partition_by(&mut b, 0, 10, 4, &mut less);
    assert_eq!(ma, mb);
    assert_eq!(a, b);
}

// ============================================================================
// Randomized Invariants
// ============================================================================

#[test]
fn test_partition_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    for _ in 0..500 {
        let n = rng.random_range(1..64);
        let mut v: Vec<i32> = (0..n).map(|_| rng.random_range(-100..100)).collect();
        let p = rng.random_range(0..n);
        let pivot_value = v[p];

        let m = partition_by(&mut v, 0, n, p, &mut less);
        assert_eq!(v[m], pivot_value);
        assert_partitioned(&v, 0, n, m);
    }
}
