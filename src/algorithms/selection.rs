//! The iterative selection loop.
//!
//! ## Purpose
//!
//! This module drives selection to completion: it repeatedly asks the
//! injected strategy for a pivot, partitions the active range around it,
//! and narrows the range toward the target rank until the rank is isolated.
//!
//! ## Design notes
//!
//! * **Iterative Narrowing**: The loop mutates a `(start, end)` pair rather
//!   than recursing, so call-stack depth never depends on how unlucky the
//!   pivots are. The only recursion in the crate is the median-of-medians
//!   strategy calling back into this loop for its block medians, which is
//!   O(log n) frames deep.
//! * **Strategy-Agnostic**: The loop knows nothing about pivot quality; the
//!   complexity bound is entirely the strategy's contract.
//!
//! ## Key concepts
//!
//! * **Active Range**: The half-open interval still known to contain the
//!   target rank. It shrinks monotonically: to `(m, end)` when the pivot
//!   rests below the rank, to `[start, m)` when above.
//!
//! ## Invariants
//!
//! * `start <= k < end` holds on every iteration.
//! * On return, the element at `k` is the k-th order statistic of the
//!   original content of `[start, end)`, and the range is partitioned
//!   around it.
//!
//! ## Non-goals
//!
//! * This module does not validate `k`; the engine validates before calling.

use crate::algorithms::partition::partition_by;
use crate::algorithms::pivot::PivotStrategy;

// ============================================================================
// Selection Loop
// ============================================================================

/// Narrow `[start, end)` until the element at `k` is the k-th order
/// statistic of the range, partitioned around it.
///
/// `k` is a global index, not range-relative. Requires
/// `start <= k < end <= v.len()`.
pub fn select_in_range<T, F, S>(
    v: &mut [T],
    mut start: usize,
    mut end: usize,
    k: usize,
    strategy: &S,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
    S: PivotStrategy,
{
    debug_assert!(start <= k && k < end && end <= v.len());

    loop {
        if end - start <= 1 {
            // The loop invariant pins k inside the range, so k == start.
            return;
        }

        let p = strategy.choose_pivot(v, start, end, is_less);
        let m = partition_by(v, start, end, p, is_less);

        if m == k {
            return;
        } else if m < k {
            start = m + 1;
        } else {
            end = m;
        }
    }
}
