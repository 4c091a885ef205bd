//! Single-threaded Set
//!
//! The set algebra engine. All algorithms live here; the concurrent set
//! runs them under its lock.

use std::collections::hash_set;
use std::hash::Hash;

use crate::store::ElementStore;
use crate::traits::{Representation, Set};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on the capacity reserved up front while deserializing
#[cfg(feature = "serde")]
const MAX_PREALLOCATED: usize = 4096;

/// Hash set with the full set algebra and no locking
///
/// Elements must implement `Eq` and `Hash`. Operations producing a new set
/// (`union`, `intersection`, `difference`, `clone`) additionally need
/// `Clone`, since the result owns copies of the elements.
///
/// # Example
/// ```rust
/// use setkit::prelude::*;
///
/// let a: PlainSet<u32> = [1, 2, 3].into_iter().collect();
/// let b: PlainSet<u32> = [3, 4, 5].into_iter().collect();
///
/// assert_eq!(a.union(&b).len(), 5);
/// assert!(a.intersection(&b).contains(&3));
/// assert!(a.difference(&b).is_equal(&PlainSet::from_elements([1, 2])));
/// ```
#[derive(Debug, Clone)]
pub struct PlainSet<T> {
    store: ElementStore<T>,
}

impl<T> PlainSet<T> {
    /// Creates a new empty set
    ///
    /// # Example
    /// ```rust
    /// use setkit::prelude::*;
    /// let set = PlainSet::<u32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            store: ElementStore::new(),
        }
    }

    /// Creates a new empty set able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: ElementStore::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the set can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns an iterator over the elements in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.store.iter()
    }

    /// Removes all elements from the set
    ///
    /// The previous storage is dropped rather than reused, so a large set
    /// gives its memory back once cleared.
    pub fn clear(&mut self) {
        self.store = ElementStore::new();
    }
}

impl<T: Eq + Hash> PlainSet<T> {
    /// Creates a set from a sequence of elements
    ///
    /// Duplicates collapse silently.
    ///
    /// # Example
    /// ```rust
    /// use setkit::prelude::*;
    /// let set = PlainSet::from_elements(["a", "b", "a", "c"]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    /// Inserts an element into the set
    ///
    /// # Returns
    /// true if the element was newly inserted, false if it already existed
    ///
    /// # Example
    /// ```rust
    /// use setkit::prelude::*;
    /// let mut set = PlainSet::new();
    /// assert!(set.add(42));  // Newly inserted
    /// assert!(!set.add(42)); // Already exists
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        self.store.add(value)
    }

    /// Removes an element from the set
    ///
    /// # Returns
    /// true if the element was present, false otherwise
    pub fn remove(&mut self, value: &T) -> bool {
        self.store.remove(value)
    }

    /// Checks if the set contains an element
    pub fn contains(&self, value: &T) -> bool {
        self.store.contains(value)
    }

    /// Checks if both sets hold exactly the same elements
    ///
    /// Insertion order never matters.
    ///
    /// # Example
    /// ```rust
    /// use setkit::prelude::*;
    /// let a = PlainSet::from_elements(["a", "b", "c"]);
    /// let b = PlainSet::from_elements(["c", "a", "b"]);
    /// assert!(a.is_equal(&b));
    /// ```
    pub fn is_equal(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }

    /// Checks if this set is a subset of another set
    ///
    /// # Returns
    /// true if all elements in this set are also in the other set
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }

    /// Checks if this set is a superset of another set
    ///
    /// # Returns
    /// true if all elements in the other set are also in this set
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<T: Eq + Hash + Clone> PlainSet<T> {
    /// Returns an owned snapshot of the elements
    ///
    /// The vector is independent of the set: later mutations of either side
    /// are not visible to the other. Order is unspecified.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns the union of this set with another set (without modifying either)
    ///
    /// The result is sized for the larger operand up front, then filled with
    /// the elements of `self` followed by those of `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut union = Self::with_capacity(self.len().max(other.len()));

        for value in self.iter() {
            union.add(value.clone());
        }

        for value in other.iter() {
            union.add(value.clone());
        }

        union
    }

    /// Returns the intersection of this set with another set (without modifying either)
    ///
    /// Iterates the smaller operand and probes the larger one. When both have
    /// the same size, `other` is iterated.
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut intersection = Self::new();
        for value in smaller.iter() {
            if larger.contains(value) {
                intersection.add(value.clone());
            }
        }

        intersection
    }

    /// Returns the elements of this set that are not in another set (without modifying either)
    pub fn difference(&self, other: &Self) -> Self {
        let mut difference = Self::new();

        for value in self.iter() {
            if !other.contains(value) {
                difference.add(value.clone());
            }
        }

        difference
    }
}

impl<T> Default for PlainSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for PlainSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Eq + Hash> Eq for PlainSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for PlainSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for PlainSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for PlainSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PlainSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> for PlainSet<T> {
    const REPRESENTATION: Representation = Representation::Plain;

    fn add(&mut self, value: T) -> bool {
        PlainSet::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        PlainSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        PlainSet::contains(self, value)
    }

    fn len(&self) -> usize {
        PlainSet::len(self)
    }

    fn is_equal(&self, other: &Self) -> bool {
        PlainSet::is_equal(self, other)
    }

    fn clear(&mut self) {
        PlainSet::clear(self)
    }

    fn to_vec(&self) -> Vec<T> {
        PlainSet::to_vec(self)
    }

    fn union(&self, other: &Self) -> Self {
        PlainSet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        PlainSet::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        PlainSet::difference(self, other)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for PlainSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for PlainSet<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use core::fmt;
        use serde::de::{SeqAccess, Visitor};

        struct PlainSetVisitor<T> {
            _phantom: core::marker::PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for PlainSetVisitor<T>
        where
            T: Deserialize<'de> + Eq + Hash,
        {
            type Value = PlainSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of set elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PlainSet<T>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
                let mut set = PlainSet::with_capacity(capacity);

                // Duplicates in the input collapse like any other insertion
                while let Some(element) = seq.next_element()? {
                    set.add(element);
                }

                Ok(set)
            }
        }

        deserializer.deserialize_seq(PlainSetVisitor {
            _phantom: core::marker::PhantomData,
        })
    }
}
