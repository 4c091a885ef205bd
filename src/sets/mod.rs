//! Set implementations
//!
//! This module provides the single-threaded set, its reader/writer-locked
//! counterpart, and the facade covering both.

pub mod any;
pub mod concurrent;
pub mod plain;

// Re-export main types
pub use any::{AnySet, new_concurrent_set, new_set};
pub use concurrent::ConcurrentSet;
pub use plain::PlainSet;
