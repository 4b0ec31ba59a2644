//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure comparison-based building block of the
//! selection engine:
//! - The median-of-five decision procedure (mo5)
//!
//! It reads the sequence but never reorders it, and carries no
//! algorithm-specific state.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median-of-five decision procedure.
pub mod mo5;
