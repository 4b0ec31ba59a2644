//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns the raw selection loop into a validated operation:
//! - Precondition validation (`validator`)
//! - The validated selection driver (`executor`)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for selection calls.
pub mod validator;

/// Validated selection execution.
pub mod executor;
