//! Base Set trait definition
//!
//! This module defines the contract shared by every set representation in
//! the crate, so that code can be written once over any of them.

use core::fmt;

/// Backing representation of a set
///
/// Binary operations are only defined between sets of the same
/// representation. The facade in [`crate::sets::AnySet`] reports a mismatch
/// as [`crate::error::SetError::RepresentationMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Single-threaded set, no locking
    Plain,
    /// Set guarded by a reader/writer lock
    Concurrent,
}

impl Representation {
    /// Returns true if sets of this representation can be shared between threads
    pub const fn is_thread_safe(&self) -> bool {
        matches!(self, Self::Concurrent)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Concurrent => f.write_str("concurrent"),
        }
    }
}

/// Set algebra over elements of type `T`
///
/// Every operation keeps the usual set invariants: an element is present at
/// most once and `len() == 0` exactly when the set is empty. Binary
/// operations take an operand of the same concrete type, so mixing
/// representations is rejected at compile time. Derived sets never share
/// storage with their operands, and operands are never modified.
pub trait Set<T>: Clone {
    /// The representation implemented by this type
    const REPRESENTATION: Representation;

    /// Inserts a value into the set
    ///
    /// Returns `true` if the value was not present before. Adding a value
    /// that is already present leaves the set unchanged.
    fn add(&mut self, value: T) -> bool;

    /// Removes a value from the set
    ///
    /// Returns `true` if the value was present. Removing an absent value is
    /// a no-op.
    fn remove(&mut self, value: &T) -> bool;

    /// Checks whether a value is in the set
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the set
    fn len(&self) -> usize;

    /// Returns true if the set has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether two sets hold exactly the same elements
    fn is_equal(&self, other: &Self) -> bool;

    /// Removes all elements, discarding the previous storage
    fn clear(&mut self);

    /// Returns an owned snapshot of the elements
    ///
    /// The order of the returned elements is unspecified.
    fn to_vec(&self) -> Vec<T>;

    /// Returns a new set with the elements of both sets
    fn union(&self, other: &Self) -> Self;

    /// Returns a new set with the elements common to both sets
    fn intersection(&self, other: &Self) -> Self;

    /// Returns a new set with the elements of `self` that are not in `other`
    fn difference(&self, other: &Self) -> Self;
}
