//! Error handling module for setkit
//!
//! This module provides the error type returned when sets are combined incorrectly.

pub mod types;

// Re-export main types
pub use types::{SetError, SetResult};
