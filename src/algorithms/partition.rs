//! In-place range partitioning around a chosen pivot.
//!
//! ## Purpose
//!
//! This module reorders a range of the sequence around a pivot element so
//! that everything left of the pivot's final slot is not greater than the
//! pivot value and everything right of it is not less. It is the single
//! mutation primitive every selection strategy drives.
//!
//! ## Design notes
//!
//! * **Hoare-Style Scan**: The pivot is parked at the front of the range and
//!   two pointers converge from both ends of the interior, swapping
//!   out-of-place pairs. A final swap drops the pivot into the convergence
//!   slot.
//! * **Original-Index Tie-Break**: The scan continuation conditions consult
//!   the pivot's *original* index `p`, not just the pivot value: an element
//!   equal to the pivot is skipped by the left scan when it sits below `p`
//!   and by the right scan when it sits above `p`. Equal elements therefore
//!   split deterministically around the pivot's original position instead of
//!   piling onto one side, which keeps splits balanced and the scan
//!   terminating under heavy duplicate clustering.
//! * **No Allocation**: O(end - start) comparisons, O(1) extra space.
//!
//! ## Key concepts
//!
//! * **Resting Index**: The returned index `m`; the pivot element itself now
//!   lives at `m`.
//! * **Two-Way Split**: "less or equal" on the left, "greater or equal" on
//!   the right; equal elements may legally settle on either side.
//!
//! ## Invariants
//!
//! * Only elements within `[start, end)` are moved.
//! * After return, `v[i] <= v[m]` for `start <= i < m` and `v[m] <= v[i]`
//!   for `m < i < end` (under the supplied relation).
//! * The scan pointers move monotonically; every swap iteration strictly
//!   shrinks the unscanned interior, so termination does not depend on the
//!   element values.
//!
//! ## Non-goals
//!
//! * This module does not produce a three-way (equal-band) partition.
//! * This module does not validate ranks; the engine validates before any
//!   mutation.

// ============================================================================
// Partition
// ============================================================================

/// Partition `v[start..end]` around the element at `p`, returning the
/// pivot's resting index.
///
/// Requires `start <= p < end <= v.len()` and a non-empty range; both are
/// upheld by the selection engine (`debug_assert`ed here).
pub fn partition_by<T, F>(
    v: &mut [T],
    start: usize,
    end: usize,
    p: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(start <= p && p < end && end <= v.len());

    if end - start <= 1 {
        return start;
    }

    // Park the pivot at the front; the interior [start+1, end) is scanned.
    v.swap(start, p);

    let mut i = start + 1;
    let mut j = end - 1;

    loop {
        // Left scan: skip elements strictly less than the pivot, and
        // pivot-equal elements sitting below the original pivot index.
        while i <= j {
            let less = is_less(&v[i], &v[start]);
            if less || (!is_less(&v[start], &v[i]) && i < p) {
                i += 1;
            } else {
                break;
            }
        }

        // Right scan: skip elements strictly greater than the pivot, and
        // pivot-equal elements sitting above the original pivot index.
        while j >= i {
            let greater = is_less(&v[start], &v[j]);
            if greater || (!is_less(&v[j], &v[start]) && j > p) {
                j -= 1;
            } else {
                break;
            }
        }

        if i >= j {
            break;
        }

        v.swap(i, j);
        i += 1;
        j -= 1;
    }

    // At exit either i == j (both scans stopped on the same pivot-equal
    // element) or i == j + 1 (pointers crossed). In both cases v[j] is not
    // greater than the pivot, so it can take the pivot's front slot.
    v.swap(start, j);
    j
}
