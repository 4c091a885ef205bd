//! Core set traits module
//!
//! This module defines the contract that every set representation implements.

pub mod set;

// Re-export main traits
pub use set::{Representation, Set};
