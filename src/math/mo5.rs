//! Median-of-five decision procedure.
//!
//! ## Purpose
//!
//! This module locates the median of five addressed elements using a fixed
//! binary decision tree of at most 6 comparisons. It is the leaf primitive
//! both pivot strategies are built on: the quick strategy applies it to five
//! spaced samples, and the median-of-medians strategy applies it to every
//! full block of five.
//!
//! ## Design notes
//!
//! * **Decision Tree, Not a Sort**: The procedure never reorders the
//!   sequence. It shuffles local index bindings only, so five elements are
//!   resolved in exactly 6 comparisons on every path.
//! * **Derivation**: Three comparisons establish two ordered pairs and
//!   discard the smaller pair's minimum (it is not greater than three other
//!   elements, so it cannot be the median). The median of five is then the
//!   second smallest of the remaining four, resolved with three more
//!   comparisons over two ordered pairs.
//! * **Explicit Branch Table**: A wrong branch here silently degrades pivot
//!   quality without crashing, so the tree is written out explicitly and
//!   verified exhaustively over all 120 permutations in the test suite.
//!
//! ## Key concepts
//!
//! * **Median Index**: The returned value is one of the five input indices,
//!   addressing an element equal in value to the true median of the five.
//!
//! ## Invariants
//!
//! * No side effects; the sequence is only read.
//! * At most 6 calls to the comparison function.
//! * Under duplicates, the returned index holds a value equal to the median
//!   value; no particular index among equals is promised.
//!
//! ## Non-goals
//!
//! * This module does not handle fewer than five indices; callers with
//!   short ranges fall back to a midpoint pivot.

use core::mem::swap;

// ============================================================================
// Median of Five
// ============================================================================

/// Return the index (one of the five given) holding the median of the five
/// addressed elements, under the supplied strict less-than relation.
///
/// Uses a fixed decision tree of at most 6 comparisons and never reorders
/// the sequence.
///
/// # Panics
///
/// Panics if any index is out of bounds for `v` (an index violation, as for
/// any slice access).
pub fn median_of_five_by<T, F>(v: &[T], indices: [usize; 5], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let [i0, i1, i2, i3, i4] = indices;

    // Comparison 1: order the first pair so that v[a] <= v[b].
    let (mut a, mut b) = if is_less(&v[i1], &v[i0]) {
        (i1, i0)
    } else {
        (i0, i1)
    };

    // Comparison 2: order the second pair so that v[c] <= v[d].
    let (mut c, mut d) = if is_less(&v[i3], &v[i2]) {
        (i3, i2)
    } else {
        (i2, i3)
    };

    // Comparison 3: make `a` the minimum of the two pair-minima. Now
    // v[a] <= v[b] and v[a] <= v[c] <= v[d], so `a` is not greater than
    // three other elements and cannot be the median. Discard it: the median
    // of the five is the second smallest of {b, c, d, e}.
    if is_less(&v[c], &v[a]) {
        swap(&mut a, &mut c);
        swap(&mut b, &mut d);
    }

    // Comparison 4: order the remaining singleton against `b` so that
    // v[b] <= v[e], leaving two ordered pairs (b, e) and (c, d).
    let (b, e) = if is_less(&v[i4], &v[b]) { (i4, b) } else { (b, i4) };

    // Comparisons 5-6: second smallest of two ordered pairs. Compare the
    // pair minima; the smaller minimum is the overall minimum of the four,
    // and the answer is the lesser of the other minimum and the discarded
    // minimum's partner.
    if is_less(&v[b], &v[c]) {
        if is_less(&v[e], &v[c]) { e } else { c }
    } else if is_less(&v[b], &v[d]) {
        b
    } else {
        d
    }
}

/// Return the index of the median of five elements under the natural order.
///
/// See [`median_of_five_by`].
pub fn median_of_five<T: Ord>(v: &[T], indices: [usize; 5]) -> usize {
    median_of_five_by(v, indices, &mut |a, b| a < b)
}
