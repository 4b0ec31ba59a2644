//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types shared by every other layer:
//! the error type returned by all fallible selection entry points.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for selection operations.
pub mod errors;
