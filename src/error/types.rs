//! Core error types for setkit
//!
//! This module defines the error type returned by the set facade.

use core::fmt;

use crate::traits::Representation;

/// Main error type for set operations
///
/// Set operations themselves never fail: adding a duplicate, removing an
/// absent element and clearing an empty set are silent no-ops. The only
/// failure is a usage error, combining two sets whose backing
/// representations differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// A binary operation was invoked with an operand of another representation
    RepresentationMismatch {
        /// Representation of the set the operation was called on
        receiver: Representation,
        /// Representation of the set passed as the operand
        operand: Representation,
    },
}

impl SetError {
    /// Returns true if retrying with different input can succeed
    ///
    /// Usage errors are programming errors, so nothing here is recoverable.
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::RepresentationMismatch { .. } => false,
        }
    }

    /// Returns true if this error signals misuse of the API
    pub const fn is_usage_error(&self) -> bool {
        match self {
            Self::RepresentationMismatch { .. } => true,
        }
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::RepresentationMismatch { .. } => "Usage",
        }
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepresentationMismatch { receiver, operand } => write!(
                f,
                "cannot combine a {receiver} set with a {operand} set"
            ),
        }
    }
}

impl std::error::Error for SetError {}

/// Result type for set operations
pub type SetResult<T> = Result<T, SetError>;
