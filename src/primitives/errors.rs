//! Error types for selection operations.
//!
//! ## Purpose
//!
//! This module defines the error type returned by all fallible selection
//! entry points. Errors describe precondition violations detected before
//! any element of the input sequence is moved.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Every variant corresponds to a check performed before
//!   the first swap, so a returned error guarantees the input is untouched.
//! * **Allocation-Free**: Variants carry plain integers, no `String`
//!   payloads, keeping the type usable without `alloc`.
//! * **Trait Implementation**: Implements `Debug`, `Clone`, `Copy`,
//!   `PartialEq`, `Eq`, `Display`, and `std::error::Error` (with `std`).
//!
//! ## Key concepts
//!
//! * **Rank**: The target index `k` into the sorted order of the sequence.
//! * **Precondition**: `0 <= k < len`; an empty sequence admits no rank.
//!
//! ## Invariants
//!
//! * An error is returned only when the sequence has not been mutated.
//!
//! ## Non-goals
//!
//! * This module does not detect inconsistent comparison functions; a
//!   non-strict-weak-ordering comparator is a caller contract violation
//!   with logically unspecified (but memory-safe) results.

use core::fmt;

// ============================================================================
// SelectError
// ============================================================================

/// Error conditions for selection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The input sequence is empty; no rank is valid.
    EmptyInput,

    /// The requested rank is not a valid index into the sequence.
    RankOutOfBounds {
        /// The requested rank.
        k: usize,
        /// The length of the sequence.
        len: usize,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::EmptyInput => write!(f, "Input sequence is empty"),
            SelectError::RankOutOfBounds { k, len } => {
                write!(f, "Rank out of bounds: k={} (must be < length {})", k, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SelectError {}
