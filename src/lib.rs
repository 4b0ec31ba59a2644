//! # kselect — k-th Order Statistic Selection for Rust
//!
//! Deterministic and practical algorithms for finding the k-th smallest
//! element of a mutable slice without sorting it: medians, percentiles,
//! and top-k extraction at O(n) instead of O(n log n).
//!
//! ## What is selection?
//!
//! The k-th order statistic of a sequence is the element that would occupy
//! index `k` if the sequence were fully sorted. Selection algorithms find
//! it by *partially* ordering the sequence: after a call, the answer rests
//! at index `k`, everything before it is not greater, everything after it
//! is not less, and nothing else about the order is promised.
//!
//! **Key advantages:**
//! - O(n) instead of O(n log n) for a single rank query
//! - In place, with O(1) auxiliary memory
//! - A worst-case-linear variant immune to adversarial input
//! - Works with any strict-weak-ordering comparison, duplicates included
//!
//! **Common applications:**
//! - Medians and robust scale estimates (MAD) in statistics pipelines
//! - Percentile cut-offs in monitoring and latency analysis
//! - Top-k extraction when k is large enough that a heap loses its edge
//! - Pivot selection inside other divide-and-conquer algorithms
//!
//! ## Quick Start
//!
//! ```rust
//! use kselect_rs::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2, 7];
//!
//! // Worst-case O(n): median-of-medians pivots.
//! let median = *select(&mut data, 3)?;
//! assert_eq!(median, 5);
//!
//! // The slice is now partitioned around index 3.
//! assert!(data[..3].iter().all(|&x| x <= 5));
//! assert!(data[4..].iter().all(|&x| x >= 5));
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! Average-case selection is cheaper per step when the input is not
//! adversarial:
//!
//! ```rust
//! use kselect_rs::prelude::*;
//!
//! let mut data = vec![0.3_f64, 1.7, 0.2, 9.4, 4.4];
//! let second = *quick_select_by(&mut data, 1, |a, b| a < b)?;
//! assert_eq!(second, 0.3);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! Read-only collections are handled by the copying overloads; the source
//! is never mutated:
//!
//! ```rust
//! use kselect_rs::prelude::*;
//!
//! let readings = [15, 3, 8, 1, 9];
//! let min = select_iter(readings.iter().copied(), 0)?;
//! assert_eq!(min, 1);
//! assert_eq!(readings, [15, 3, 8, 1, 9]);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ## Choosing a flavor
//!
//! | Entry point | Pivot strategy | Complexity | Use when |
//! |---------------------|-------------------|-----------------------------|----------------------------------------|
//! | `select` | Median-of-medians | O(n) worst case | Input may be adversarial or unknown |
//! | `quick_select` | Sampled mo5 | O(n) average, O(n²) worst | Throughput matters, input is benign |
//! | `select_iter` | Median-of-medians | O(n) + one copy | Source must stay untouched |
//! | `median_of_five` | — | 6 comparisons | You need the primitive itself |
//!
//! `select_by`, `quick_select_by`, and `median_of_five_by` accept a custom
//! strict less-than relation instead of requiring `Ord`.
//!
//! ## Evaluation helpers
//!
//! The `evaluation` layer wraps the engine in the summaries callers
//! usually want:
//!
//! ```rust
//! use kselect_rs::prelude::*;
//!
//! let mut residuals = vec![1.0_f64, -3.0, 2.0, -1.0, 0.5];
//! let spread = mad(&mut residuals)?;
//! assert!(spread >= 0.0);
//! # Result::<(), SelectError>::Ok(())
//! ```
//!
//! ## Error handling
//!
//! Fallible entry points return `Result<_, SelectError>`. Validation is
//! fail-fast and runs before the first swap, so an `Err` guarantees the
//! input was not mutated:
//!
//! ```rust
//! use kselect_rs::prelude::*;
//!
//! let mut empty: Vec<i32> = vec![];
//! assert_eq!(select(&mut empty, 0), Err(SelectError::EmptyInput));
//!
//! let mut data = vec![1, 2, 3];
//! assert_eq!(
//!     select(&mut data, 3),
//!     Err(SelectError::RankOutOfBounds { k: 3, len: 3 })
//! );
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency; the in-place API needs no
//! allocator, and the copying overloads use `alloc`:
//!
//! ```toml
//! [dependencies]
//! kselect_rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Blum, M., Floyd, R. W., Pratt, V., Rivest, R. L. & Tarjan, R. E.
//!   (1973). "Time bounds for selection"
//! - Hoare, C. A. R. (1961). "Algorithm 65: Find"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
//
// Contains the `SelectError` type returned by every fallible entry point.
mod primitives;

// Layer 2: Math - pure comparison procedures.
//
// Contains the median-of-five decision tree (mo5), the leaf primitive both
// pivot strategies are built on.
mod math;

// Layer 3: Algorithms - the selection core.
//
// Contains in-place partitioning, the two pivot strategies (quick-median
// and median-of-medians), and the iterative selection loop.
mod algorithms;

// Layer 4: Engine - validated execution.
//
// Contains precondition validation and the validated selection driver the
// public surface composes with a strategy.
mod engine;

// Layer 5: Evaluation - order-statistic summaries.
//
// Contains medians, quantiles, MAD, and top-k extraction built on the
// engine.
mod evaluation;

// High-level API for selection.
//
// Provides the public free functions (`select`, `quick_select`, copying
// overloads, `median_of_five`).
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard selection prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used functions and types:
///
/// ```
/// use kselect_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        median_of_five, median_of_five_by, partition_by, quick_select, quick_select_by,
        quick_select_iter, select, select_by, select_iter, MedianOfMedians, PivotStrategy,
        QuickMedian, SelectError,
    };
    pub use crate::evaluation::stats::{mad, median, quantile, smallest_k};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal comparison procedures.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation helpers.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
