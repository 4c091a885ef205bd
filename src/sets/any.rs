//! Set facade
//!
//! One type covering both set representations, with the constructors client
//! code is expected to use.

use std::hash::Hash;

use log::warn;

use crate::error::{SetError, SetResult};
use crate::sets::{ConcurrentSet, PlainSet};
use crate::traits::Representation;

/// A set of either representation behind a single type
///
/// Unary operations dispatch to the underlying set. Binary operations only
/// combine sets of the same representation; anything else is reported as
/// [`SetError::RepresentationMismatch`].
///
/// # Example
/// ```rust
/// use setkit::prelude::*;
///
/// let a = new_set([1, 2, 3]);
/// let b = new_set([3, 4, 5]);
/// assert_eq!(a.intersection(&b)?.to_vec(), vec![3]);
///
/// let locked = new_concurrent_set([1, 2, 3]);
/// assert!(a.is_equal(&locked).is_err());
/// # Ok::<(), setkit::error::SetError>(())
/// ```
#[derive(Debug, Clone)]
pub enum AnySet<T> {
    /// Single-threaded set
    Plain(PlainSet<T>),
    /// Reader/writer-locked set
    Concurrent(ConcurrentSet<T>),
}

/// Creates a single-threaded set holding `elements`
///
/// Duplicates collapse silently.
///
/// # Example
/// ```rust
/// use setkit::prelude::*;
/// let set = new_set(["a", "b", "a", "c"]);
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.representation(), Representation::Plain);
/// ```
pub fn new_set<T, I>(elements: I) -> AnySet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    AnySet::Plain(PlainSet::from_elements(elements))
}

/// Creates a reader/writer-locked set holding `elements`
///
/// Duplicates collapse silently.
///
/// The mutators of [`AnySet`] take `&mut self`, so they cannot be called
/// from several threads at once. To share one set between threads, borrow
/// the underlying [`ConcurrentSet`] through [`AnySet::as_concurrent`]; its
/// operations all take `&self`.
///
/// # Example
/// ```rust
/// use setkit::prelude::*;
/// use std::thread;
///
/// let set = new_concurrent_set([0u32]);
/// let shared = set.as_concurrent().unwrap();
///
/// thread::scope(|scope| {
///     for worker in 1..=4u32 {
///         scope.spawn(move || {
///             shared.add(worker);
///         });
///     }
/// });
///
/// assert_eq!(set.len(), 5);
/// ```
pub fn new_concurrent_set<T, I>(elements: I) -> AnySet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    AnySet::Concurrent(ConcurrentSet::from_elements(elements))
}

impl<T> AnySet<T> {
    /// Returns the representation backing this set
    pub fn representation(&self) -> Representation {
        match self {
            Self::Plain(_) => Representation::Plain,
            Self::Concurrent(_) => Representation::Concurrent,
        }
    }

    /// Returns the single-threaded set, if that is the representation
    pub fn as_plain(&self) -> Option<&PlainSet<T>> {
        match self {
            Self::Plain(set) => Some(set),
            Self::Concurrent(_) => None,
        }
    }

    /// Returns the locked set, if that is the representation
    ///
    /// The returned reference allows mutation through `&self`, which is what
    /// sharing between threads needs.
    pub fn as_concurrent(&self) -> Option<&ConcurrentSet<T>> {
        match self {
            Self::Plain(_) => None,
            Self::Concurrent(set) => Some(set),
        }
    }

    /// Returns the number of elements in the set
    pub fn len(&self) -> usize {
        match self {
            Self::Plain(set) => set.len(),
            Self::Concurrent(set) => set.len(),
        }
    }

    /// Checks if the set is empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(set) => set.is_empty(),
            Self::Concurrent(set) => set.is_empty(),
        }
    }

    /// Removes all elements from the set
    pub fn clear(&mut self) {
        match self {
            Self::Plain(set) => set.clear(),
            Self::Concurrent(set) => set.clear(),
        }
    }

    fn mismatch(&self, other: &Self) -> SetError {
        let error = SetError::RepresentationMismatch {
            receiver: self.representation(),
            operand: other.representation(),
        };
        warn!("rejected set operation: {error}");
        error
    }
}

impl<T: Eq + Hash> AnySet<T> {
    /// Inserts an element, returning true if it was not present
    pub fn add(&mut self, value: T) -> bool {
        match self {
            Self::Plain(set) => set.add(value),
            Self::Concurrent(set) => set.add(value),
        }
    }

    /// Removes an element, returning true if it was present
    pub fn remove(&mut self, value: &T) -> bool {
        match self {
            Self::Plain(set) => set.remove(value),
            Self::Concurrent(set) => set.remove(value),
        }
    }

    /// Checks if the set contains an element
    pub fn contains(&self, value: &T) -> bool {
        match self {
            Self::Plain(set) => set.contains(value),
            Self::Concurrent(set) => set.contains(value),
        }
    }

    /// Checks if both sets hold exactly the same elements
    ///
    /// # Errors
    /// [`SetError::RepresentationMismatch`] if `other` has another representation
    pub fn is_equal(&self, other: &Self) -> SetResult<bool> {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => Ok(a.is_equal(b)),
            (Self::Concurrent(a), Self::Concurrent(b)) => Ok(a.is_equal(b)),
            _ => Err(self.mismatch(other)),
        }
    }
}

impl<T: Eq + Hash + Clone> AnySet<T> {
    /// Returns an owned snapshot of the elements in unspecified order
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Self::Plain(set) => set.to_vec(),
            Self::Concurrent(set) => set.to_vec(),
        }
    }

    /// Returns a new set with the elements of both sets
    ///
    /// # Errors
    /// [`SetError::RepresentationMismatch`] if `other` has another representation
    pub fn union(&self, other: &Self) -> SetResult<Self> {
        self.combine(other, PlainSet::union, ConcurrentSet::union)
    }

    /// Returns a new set with the elements common to both sets
    ///
    /// # Errors
    /// [`SetError::RepresentationMismatch`] if `other` has another representation
    pub fn intersection(&self, other: &Self) -> SetResult<Self> {
        self.combine(other, PlainSet::intersection, ConcurrentSet::intersection)
    }

    /// Returns a new set with the elements of `self` not found in `other`
    ///
    /// # Errors
    /// [`SetError::RepresentationMismatch`] if `other` has another representation
    pub fn difference(&self, other: &Self) -> SetResult<Self> {
        self.combine(other, PlainSet::difference, ConcurrentSet::difference)
    }

    fn combine<P, C>(&self, other: &Self, op: P, concurrent_op: C) -> SetResult<Self>
    where
        P: FnOnce(&PlainSet<T>, &PlainSet<T>) -> PlainSet<T>,
        C: FnOnce(&ConcurrentSet<T>, &ConcurrentSet<T>) -> ConcurrentSet<T>,
    {
        match (self, other) {
            (Self::Plain(a), Self::Plain(b)) => Ok(Self::Plain(op(a, b))),
            (Self::Concurrent(a), Self::Concurrent(b)) => {
                Ok(Self::Concurrent(concurrent_op(a, b)))
            }
            _ => Err(self.mismatch(other)),
        }
    }
}

impl<T> From<PlainSet<T>> for AnySet<T> {
    fn from(set: PlainSet<T>) -> Self {
        Self::Plain(set)
    }
}

impl<T> From<ConcurrentSet<T>> for AnySet<T> {
    fn from(set: ConcurrentSet<T>) -> Self {
        Self::Concurrent(set)
    }
}
