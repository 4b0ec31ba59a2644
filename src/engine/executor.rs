//! Validated selection execution.
//!
//! ## Purpose
//!
//! This module combines the validator with the selection loop into the
//! single entry point the API layer and the evaluation layer build on:
//! validate the rank, run the loop over the whole sequence with the
//! injected strategy, and hand back the element now resting at the rank.
//!
//! ## Design notes
//!
//! * **One Driver**: Both public flavors (`select`, `quick_select`) are
//!   this executor composed with a different [`PivotStrategy`].
//! * **Borrowed Result**: The returned reference aliases the slot at `k`;
//!   callers needing an owned value go through the copying API overloads.
//!
//! ## Key concepts
//!
//! * **Postcondition**: On `Ok`, the sequence is partitioned around index
//!   `k` and the returned reference points at the k-th order statistic.
//!
//! ## Invariants
//!
//! * On `Err`, the sequence has not been mutated.
//!
//! ## Non-goals
//!
//! * This module does not copy read-only collections; that is API-layer
//!   glue.

use crate::algorithms::pivot::PivotStrategy;
use crate::algorithms::selection::select_in_range;
use crate::engine::validator::Validator;
use crate::primitives::errors::SelectError;

// ============================================================================
// Executor
// ============================================================================

/// Validate `k`, select in place with `strategy`, and return a reference
/// to the element now at index `k`.
pub fn select_with<'a, T, F, S>(
    v: &'a mut [T],
    k: usize,
    strategy: &S,
    is_less: &mut F,
) -> Result<&'a T, SelectError>
where
    F: FnMut(&T, &T) -> bool,
    S: PivotStrategy,
{
    Validator::validate_rank(k, v.len())?;
    select_in_range(v, 0, v.len(), k, strategy, is_less);
    Ok(&v[k])
}
