//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer provides the order-statistic summaries most callers actually
//! want from a selection engine:
//! - Medians, quantiles, MAD, and top-k extraction (`stats`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Order-statistic summaries built on the selection engine.
pub mod stats;
