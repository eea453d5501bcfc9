//! Shared utilities for depstage.
//!
//! Cross-cutting concerns used by every other depstage crate: the unified
//! error type, filesystem helpers, SHA-256 hashing, and step output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
