//! Reader/writer-locked Set
//!
//! Wraps a [`PlainSet`] in a [`parking_lot::RwLock`] so that one instance can
//! be shared between threads. Every operation takes `&self`.

use core::ptr;
use std::hash::Hash;

use log::trace;
use parking_lot::RwLock;

use crate::sets::PlainSet;
use crate::traits::{Representation, Set};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hash set guarded by a reader/writer lock
///
/// Queries (`contains`, `len`, `is_empty`, `to_vec`, `clone`) take the shared
/// lock, mutations (`add`, `remove`, `clear`) take the exclusive lock. Each
/// call is atomic on its own; check-then-act sequences spanning several calls
/// are not.
///
/// Binary operations hold the shared locks of both operands for the whole
/// computation. The two locks are always acquired in the order of their
/// addresses, so `a.union(&b)` and `b.union(&a)` running at the same time
/// cannot deadlock, whatever writers are queued on either set.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use setkit::prelude::*;
///
/// let set = Arc::new(ConcurrentSet::new());
/// let handles: Vec<_> = (0..4u32)
///     .map(|block| {
///         let set = Arc::clone(&set);
///         thread::spawn(move || {
///             for value in block * 10..(block + 1) * 10 {
///                 set.add(value);
///             }
///         })
///     })
///     .collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(set.len(), 40);
/// ```
#[derive(Debug)]
pub struct ConcurrentSet<T> {
    inner: RwLock<PlainSet<T>>,
}

impl<T> ConcurrentSet<T> {
    /// Creates a new empty set
    pub fn new() -> Self {
        Self::from(PlainSet::new())
    }

    /// Creates a new empty set able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(PlainSet::with_capacity(capacity))
    }

    /// Returns the number of elements in the set
    ///
    /// Under concurrent writers the value reflects some instant during the call.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes all elements from the set, discarding the previous storage
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Consumes the lock and returns the underlying single-threaded set
    pub fn into_inner(self) -> PlainSet<T> {
        self.inner.into_inner()
    }

    fn lock_key(&self) -> usize {
        &self.inner as *const RwLock<PlainSet<T>> as usize
    }

    /// Runs `f` with shared access to both sets
    ///
    /// Locks are taken in ascending address order and released in reverse.
    /// A set combined with itself is locked once.
    fn with_both<R>(&self, other: &Self, f: impl FnOnce(&PlainSet<T>, &PlainSet<T>) -> R) -> R {
        if ptr::eq(self, other) {
            let guard = self.inner.read();
            return f(&*guard, &*guard);
        }

        let (own_key, other_key) = (self.lock_key(), other.lock_key());
        if own_key < other_key {
            trace!("locking set {own_key:#x} before {other_key:#x}");
            let own = self.inner.read();
            let theirs = other.inner.read();
            let result = f(&*own, &*theirs);
            drop(theirs);
            drop(own);
            result
        } else {
            trace!("locking set {other_key:#x} before {own_key:#x}");
            let theirs = other.inner.read();
            let own = self.inner.read();
            let result = f(&*own, &*theirs);
            drop(own);
            drop(theirs);
            result
        }
    }
}

impl<T: Eq + Hash> ConcurrentSet<T> {
    /// Creates a set from a sequence of elements, collapsing duplicates
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(PlainSet::from_elements(elements))
    }

    /// Inserts an element into the set
    ///
    /// # Returns
    /// true if the element was newly inserted, false if it already existed
    pub fn add(&self, value: T) -> bool {
        self.inner.write().add(value)
    }

    /// Removes an element from the set
    ///
    /// # Returns
    /// true if the element was present, false otherwise
    pub fn remove(&self, value: &T) -> bool {
        self.inner.write().remove(value)
    }

    /// Checks if the set contains an element
    pub fn contains(&self, value: &T) -> bool {
        self.inner.read().contains(value)
    }

    /// Checks if both sets hold exactly the same elements
    pub fn is_equal(&self, other: &Self) -> bool {
        self.with_both(other, PlainSet::is_equal)
    }

    /// Checks if this set is a subset of another set
    pub fn is_subset(&self, other: &Self) -> bool {
        self.with_both(other, PlainSet::is_subset)
    }

    /// Checks if this set is a superset of another set
    pub fn is_superset(&self, other: &Self) -> bool {
        self.with_both(other, PlainSet::is_superset)
    }
}

impl<T: Eq + Hash + Clone> ConcurrentSet<T> {
    /// Returns an owned snapshot of the elements in unspecified order
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().to_vec()
    }

    /// Returns a single-threaded copy of the current contents
    pub fn snapshot(&self) -> PlainSet<T> {
        self.inner.read().clone()
    }

    /// Returns the union of both sets as a new, independently locked set
    pub fn union(&self, other: &Self) -> Self {
        Self::from(self.with_both(other, PlainSet::union))
    }

    /// Returns the intersection of both sets as a new, independently locked set
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from(self.with_both(other, PlainSet::intersection))
    }

    /// Returns the elements of this set that are not in `other`, as a new set
    pub fn difference(&self, other: &Self) -> Self {
        Self::from(self.with_both(other, PlainSet::difference))
    }
}

// Clone goes through the shared lock, so it cannot be derived
impl<T: Clone> Clone for ConcurrentSet<T> {
    fn clone(&self) -> Self {
        Self::from(self.inner.read().clone())
    }
}

impl<T> Default for ConcurrentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<PlainSet<T>> for ConcurrentSet<T> {
    fn from(set: PlainSet<T>) -> Self {
        Self {
            inner: RwLock::new(set),
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for ConcurrentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<PlainSet<T>>())
    }
}

impl<T: Eq + Hash> PartialEq for ConcurrentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq + Hash> Eq for ConcurrentSet<T> {}

impl<T: Eq + Hash + Clone> Set<T> for ConcurrentSet<T> {
    const REPRESENTATION: Representation = Representation::Concurrent;

    fn add(&mut self, value: T) -> bool {
        ConcurrentSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        ConcurrentSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        ConcurrentSet::contains(self, value)
    }

    fn len(&self) -> usize {
        ConcurrentSet::len(self)
    }

    fn is_empty(&self) -> bool {
        ConcurrentSet::is_empty(self)
    }

    fn is_equal(&self, other: &Self) -> bool {
        ConcurrentSet::is_equal(self, other)
    }

    fn clear(&mut self) {
        ConcurrentSet::clear(self)
    }

    fn to_vec(&self) -> Vec<T> {
        ConcurrentSet::to_vec(self)
    }

    fn union(&self, other: &Self) -> Self {
        ConcurrentSet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        ConcurrentSet::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        ConcurrentSet::difference(self, other)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for ConcurrentSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let guard = self.inner.read();
        serializer.collect_seq(guard.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for ConcurrentSet<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        PlainSet::deserialize(deserializer).map(Self::from)
    }
}
