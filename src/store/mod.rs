//! Element storage
//!
//! Keyed presence tracking used as the backing store of every set. The store
//! has no concurrency control of its own.

use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

/// Hash-based presence map from element to unit marker
///
/// Insertion, removal and membership checks run in expected O(1).
#[derive(Debug, Clone)]
pub struct ElementStore<T> {
    entries: HashSet<T>,
}

impl<T> ElementStore<T> {
    /// Creates an empty store without allocating
    pub fn new() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Creates an empty store able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashSet::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the store
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no elements
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements the store can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterates the stored elements in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Eq + Hash> ElementStore<T> {
    /// Marks `value` as present, returning true if it was absent before
    pub fn add(&mut self, value: T) -> bool {
        self.entries.insert(value)
    }

    /// Clears the presence of `value`, returning true if it was present
    pub fn remove(&mut self, value: &T) -> bool {
        self.entries.remove(value)
    }

    /// Checks whether `value` is present
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }
}

impl<T> Default for ElementStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for ElementStore<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ElementStore<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
