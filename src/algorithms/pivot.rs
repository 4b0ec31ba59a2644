//! Pivot selection strategies.
//!
//! ## Purpose
//!
//! This module nominates the partition pivot for the selection loop. Two
//! strategies are provided: a cheap sampled heuristic (`QuickMedian`) and
//! the worst-case-linear classical guarantee (`MedianOfMedians`).
//!
//! ## Design notes
//!
//! * **Injected Strategy**: Strategies implement [`PivotStrategy`], keeping
//!   the selection loop strategy-agnostic. This also expresses the one
//!   recursive coupling in the crate cleanly: `MedianOfMedians` calls back
//!   into the selection loop with *itself* as the inner pivot chooser.
//! * **QuickMedian**: O(1) per call. Ranges under five elements take their
//!   midpoint with no comparisons; larger ranges take the mo5 median of
//!   five evenly spaced samples. An adversary can still force degenerate
//!   splits.
//! * **MedianOfMedians**: O(n) per call. Every full block of five
//!   contributes its mo5 median, compacted into a prefix of the range;
//!   selecting the middle of that prefix guarantees roughly 3/10 of the
//!   range strictly on each side of the resulting pivot, which bounds the
//!   whole selection at `T(n) = T(n/5) + T(7n/10) + O(n) = O(n)`.
//!
//! ## Key concepts
//!
//! * **Block Medians**: The contiguous prefix `[start, e)` holding one
//!   median per full block of five; a trailing partial block contributes
//!   nothing.
//! * **Base Case**: Fewer than two collected medians (range under ten
//!   elements) returns `start` directly.
//!
//! ## Invariants
//!
//! * The returned index always lies within the queried range.
//! * `QuickMedian` never mutates the sequence; `MedianOfMedians` reorders
//!   only within `[start, end)`.
//!
//! ## Non-goals
//!
//! * Strategies do not partition; they only nominate an index.

use crate::algorithms::selection::select_in_range;
use crate::math::mo5::median_of_five_by;

// ============================================================================
// Strategy Trait
// ============================================================================

/// A pivot chooser for the selection loop.
///
/// Given the active range `[start, end)` of the sequence, nominates one
/// index within the range to partition around. Implementations may reorder
/// elements inside the range (the median-of-medians strategy does) but must
/// not touch anything outside it.
pub trait PivotStrategy {
    /// Nominate a pivot index in `[start, end)`.
    ///
    /// Requires a non-empty range.
    fn choose_pivot<T, F>(&self, v: &mut [T], start: usize, end: usize, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

// ============================================================================
// Quick Median
// ============================================================================

/// Cheap sampled pivot chooser: mo5 over five evenly spaced elements.
///
/// Average-case O(n) selection overall; worst-case O(n²) on adversarial
/// orderings.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickMedian;

impl PivotStrategy for QuickMedian {
    fn choose_pivot<T, F>(&self, v: &mut [T], start: usize, end: usize, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(start < end && end <= v.len());

        let len = end - start;
        if len < 5 {
            return start + len / 2;
        }

        let s = len / 5;
        median_of_five_by(
            v,
            [start, start + s, start + 2 * s, start + 3 * s, start + 4 * s],
            is_less,
        )
    }
}

// ============================================================================
// Median of Medians
// ============================================================================

/// Worst-case-linear pivot chooser (Blum-Floyd-Pratt-Rivest-Tarjan).
///
/// Guarantees that a constant fraction (~3/10) of the range lies strictly
/// on each side of the chosen pivot after partitioning.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfMedians;

impl PivotStrategy for MedianOfMedians {
    fn choose_pivot<T, F>(&self, v: &mut [T], start: usize, end: usize, is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(start < end && end <= v.len());

        // Collect the median of every full block of five into a compacting
        // cursor at the front of the range. The trailing partial block is
        // dropped; its elements cannot shift the guarantee by more than a
        // constant.
        let mut e = start;
        let mut block = start;
        while block + 5 <= end {
            let m = median_of_five_by(
                v,
                [block, block + 1, block + 2, block + 3, block + 4],
                is_less,
            );
            v.swap(e, m);
            e += 1;
            block += 5;
        }

        // Fewer than two collected medians: the range held under ten
        // elements, any pivot keeps the loop linear.
        if e <= start + 1 {
            return start;
        }

        // Select the middle block-median within [start, e), recursing with
        // this same strategy as the inner pivot chooser. The selection
        // postcondition leaves the true median-of-medians at index k.
        let k = start + (e - start) / 2;
        select_in_range(v, start, e, k, &MedianOfMedians, is_less);
        k
    }
}
