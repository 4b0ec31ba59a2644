//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the algorithmic core of the crate:
//! - In-place partitioning around a pivot (`partition`)
//! - The two pivot selection strategies (`pivot`)
//! - The iterative selection loop (`selection`)
//!
//! The median-of-medians strategy and the selection loop are mutually
//! coupled by design: the strategy recursively selects the median of its
//! collected block medians through the loop, with itself as the inner
//! pivot chooser.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// In-place range partitioning around a chosen pivot.
pub mod partition;

/// Pivot selection strategies.
pub mod pivot;

/// The iterative selection loop.
pub mod selection;
