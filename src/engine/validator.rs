//! Input validation for selection calls.
//!
//! ## Purpose
//!
//! This module checks the rank precondition before any element of the
//! sequence is moved. A failed check means the caller's sequence is
//! untouched.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violated precondition.
//! * **Validate-Then-Mutate**: All checks run before the first swap; there
//!   is no partially-partitioned failure state.
//!
//! ## Key concepts
//!
//! * **Rank Bound**: `0 <= k < len`; an empty sequence admits no rank.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not verify that a comparison function is a strict
//!   weak ordering; that contract cannot be checked at runtime.

use crate::primitives::errors::SelectError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for selection preconditions.
///
/// All methods return `Result<(), SelectError>` and fail fast upon the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate a target rank against a sequence length.
    pub fn validate_rank(k: usize, len: usize) -> Result<(), SelectError> {
        // Check 1: Non-empty sequence
        if len == 0 {
            return Err(SelectError::EmptyInput);
        }

        // Check 2: Rank within bounds
        if k >= len {
            return Err(SelectError::RankOutOfBounds { k, len });
        }

        Ok(())
    }
}
