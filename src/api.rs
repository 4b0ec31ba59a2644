//! Public selection API.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate: free functions for
//! in-place selection under the natural order or a caller-supplied
//! relation, the median-of-five primitive, and copying overloads for
//! read-only collections.
//!
//! ## Design notes
//!
//! * **Free Functions**: Selection is exposed as plain functions over
//!   `&mut [T]` rather than extension-method machinery; callers that want
//!   fluent syntax can wrap these trivially.
//! * **Two Flavors**: [`select`] guarantees worst-case O(n) via
//!   median-of-medians; [`quick_select`] trades the guarantee for a lower
//!   constant factor (average O(n), adversarial worst case O(n²)).
//! * **Copy Overloads**: [`select_iter`] and [`quick_select_iter`] buffer
//!   any `IntoIterator` into a fresh `Vec` and select on the copy — the one
//!   place the in-place contract is intentionally broken, so immutable
//!   inputs stay untouched.
//!
//! ## Key concepts
//!
//! * **Rank `k`**: 0-indexed position in sorted order; `k = 0` is the
//!   minimum, `k = n - 1` the maximum.
//! * **Strict Weak Ordering**: The contract `is_less` must satisfy;
//!   violations give logically unspecified (but memory-safe) results.
//!
//! ## Invariants
//!
//! * On `Ok`, the mutated slice is partitioned around index `k` and the
//!   element there equals the k-th smallest of the original contents.
//! * On `Err`, the input has not been mutated.
//!
//! ## Non-goals
//!
//! * Stable ordering of equal elements, full sorting, and parallel
//!   selection are all out of scope.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::select_with;

// Publicly re-exported types
pub use crate::algorithms::partition::partition_by;
pub use crate::algorithms::pivot::{MedianOfMedians, PivotStrategy, QuickMedian};
pub use crate::math::mo5::{median_of_five, median_of_five_by};
pub use crate::primitives::errors::SelectError;

// ============================================================================
// In-Place Selection
// ============================================================================

/// Select the k-th smallest element in place, worst-case O(n).
///
/// Uses the median-of-medians pivot strategy. On success the slice is
/// partitioned around index `k` and a reference to the element there is
/// returned.
///
/// ```
/// use kselect_rs::prelude::*;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2, 7];
/// assert_eq!(select(&mut data, 3), Ok(&5));
/// assert_eq!(data[3], 5);
/// ```
pub fn select<T: Ord>(v: &mut [T], k: usize) -> Result<&T, SelectError> {
    select_with(v, k, &MedianOfMedians, &mut |a, b| a < b)
}

/// Select the k-th smallest element under a custom order, worst-case O(n).
///
/// `is_less` must be a strict weak ordering.
pub fn select_by<T, F>(v: &mut [T], k: usize, mut is_less: F) -> Result<&T, SelectError>
where
    F: FnMut(&T, &T) -> bool,
{
    select_with(v, k, &MedianOfMedians, &mut is_less)
}

/// Select the k-th smallest element in place, average-case O(n).
///
/// Uses the sampled quick-median pivot strategy: cheaper per step than
/// [`select`], but an adversarial ordering can force O(n²).
pub fn quick_select<T: Ord>(v: &mut [T], k: usize) -> Result<&T, SelectError> {
    select_with(v, k, &QuickMedian, &mut |a, b| a < b)
}

/// Select the k-th smallest element under a custom order, average-case
/// O(n).
pub fn quick_select_by<T, F>(v: &mut [T], k: usize, mut is_less: F) -> Result<&T, SelectError>
where
    F: FnMut(&T, &T) -> bool,
{
    select_with(v, k, &QuickMedian, &mut is_less)
}

// ============================================================================
// Copying Overloads
// ============================================================================

/// Select the k-th smallest of any iterable by copying into a temporary
/// buffer, worst-case O(n).
///
/// The source collection is never mutated; the selected value is returned
/// by ownership.
///
/// ```
/// use kselect_rs::prelude::*;
///
/// let readings = [5, 3, 8, 1, 9, 2, 7];
/// assert_eq!(select_iter(readings.iter().copied(), 0), Ok(1));
/// assert_eq!(readings[0], 5); // untouched
/// ```
pub fn select_iter<I, T>(values: I, k: usize) -> Result<T, SelectError>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut buf: Vec<T> = values.into_iter().collect();
    select(&mut buf, k)?;
    Ok(buf.swap_remove(k))
}

/// Select the k-th smallest of any iterable by copying into a temporary
/// buffer, average-case O(n).
pub fn quick_select_iter<I, T>(values: I, k: usize) -> Result<T, SelectError>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    let mut buf: Vec<T> = values.into_iter().collect();
    quick_select(&mut buf, k)?;
    Ok(buf.swap_remove(k))
}
