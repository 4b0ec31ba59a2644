//! Order-statistic summaries built on the selection engine.
//!
//! ## Purpose
//!
//! This module provides the statistics selection exists for in practice:
//! medians, quantiles, the Median Absolute Deviation (MAD), and top-k
//! extraction, each at O(n) via the engine instead of O(n log n) via
//! sorting.
//!
//! ## Design notes
//!
//! * **In-Place**: Every function reorders its input slice (a partition
//!   around the selected rank), never allocates, and documents that the
//!   input comes back permuted.
//! * **Float Ordering**: Floating-point comparisons use `partial_cmp` with
//!   ties (incomparable pairs) treated as equal; NaN handling is out of
//!   contract, matching the non-finite non-goal below.
//! * **Even Lengths**: The median of an even-length slice averages the two
//!   central order statistics: one selection for the upper, then a linear
//!   max-scan of the lower partition for the lower.
//!
//! ## Key concepts
//!
//! * **MAD**: `median(|r_i - median(r)|)`, a robust scale estimate with a
//!   50% breakdown point.
//! * **Nearest-Rank Quantile**: `quantile(v, q)` selects rank
//!   `round(q * (n - 1))`.
//!
//! ## Invariants
//!
//! * MAD >= 0 for any input.
//! * Even and odd lengths are handled correctly.
//!
//! ## Non-goals
//!
//! * This module does not provide weighted variants.
//! * This module does not handle non-finite values (NaN/Inf).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::pivot::QuickMedian;
use crate::engine::executor::select_with;
use crate::primitives::errors::SelectError;

// ============================================================================
// Median and Quantile
// ============================================================================

/// Compute the median of a float slice in place in O(n).
///
/// Even-length slices return the mean of the two central order statistics.
/// The slice comes back permuted (partitioned around the selected rank).
pub fn median<T: Float>(vals: &mut [T]) -> Result<T, SelectError> {
    let n = vals.len();
    if n == 0 {
        return Err(SelectError::EmptyInput);
    }

    let mid = n / 2;
    let upper = *select_with(vals, mid, &QuickMedian, &mut float_less)?;

    if n % 2 == 1 {
        return Ok(upper);
    }

    // The lower central statistic is the maximum of the lower partition
    // left behind by the selection.
    let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);

    Ok((lower + upper) / T::from(2.0).unwrap())
}

/// Compute the nearest-rank quantile `q` (in `[0, 1]`) in place in O(n).
///
/// Values of `q` outside `[0, 1]` are clamped. `quantile(v, 0.5)` is the
/// lower-median, not the averaged [`median`].
pub fn quantile<T: Float>(vals: &mut [T], q: T) -> Result<T, SelectError> {
    let n = vals.len();
    if n == 0 {
        return Err(SelectError::EmptyInput);
    }

    let q = q.max(T::zero()).min(T::one());
    let rank = (q * T::from(n - 1).unwrap())
        .round()
        .to_usize()
        .unwrap_or(n - 1)
        .min(n - 1);

    select_with(vals, rank, &QuickMedian, &mut float_less).map(|r| *r)
}

// ============================================================================
// MAD
// ============================================================================

/// Compute the Median Absolute Deviation in place, avoiding extra
/// allocations.
///
/// # Formula
///
/// ```text
/// MAD = median(|r_i - median(r)|)
/// ```
///
/// The slice contents are replaced by absolute deviations and permuted.
pub fn mad<T: Float>(vals: &mut [T]) -> Result<T, SelectError> {
    // Step 1: Median of the residuals
    let center = median(vals)?;

    // Step 2: Absolute deviations from the median
    for val in vals.iter_mut() {
        *val = (*val - center).abs();
    }

    // Step 3: Median of the absolute deviations
    median(vals)
}

// ============================================================================
// Top-K
// ============================================================================

/// Partition the k smallest elements into the front of the slice and
/// return them, unordered, in O(n).
///
/// `k == 0` yields an empty slice; `k == v.len()` is the whole slice.
pub fn smallest_k<T: Ord>(v: &mut [T], k: usize) -> Result<&[T], SelectError> {
    if k == 0 {
        return Ok(&v[..0]);
    }
    if k > v.len() {
        return Err(SelectError::RankOutOfBounds { k, len: v.len() });
    }

    select_with(v, k - 1, &QuickMedian, &mut |a, b| a < b)?;
    Ok(&v[..k])
}

// ============================================================================
// Helpers
// ============================================================================

/// Strict less-than over floats, treating incomparable pairs as equal.
fn float_less<T: Float>(a: &T, b: &T) -> bool {
    a.partial_cmp(b).unwrap_or(Equal).is_lt()
}
