#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Generic hash sets with full set algebra**
//!
//! setkit provides a value-based set over any `Eq + Hash` element type, in
//! two representations sharing one contract:
//!
//! - [`PlainSet`] - single-threaded, no locking
//! - [`ConcurrentSet`] - guarded by a reader/writer lock, shareable between threads
//!
//! Both support membership, mutation, equality, cloning, union, intersection
//! and difference. Derived sets are independent copies; operands are never
//! modified.
//!
//! ## Features
//!
//! - `serde` - Serialize sets as a sequence of elements (order unspecified)
//!
//! ## Choosing a representation
//!
//! | | `PlainSet` | `ConcurrentSet` |
//! |---|---|---|
//! | **Mutation** | `&mut self` | `&self` (exclusive lock) |
//! | **Queries** | `&self` | `&self` (shared lock) |
//! | **Mutable from several threads** | ❌ | ✅ |
//! | **Binary operations** | with `PlainSet` | with `ConcurrentSet`, deadlock-free in either direction |
//!
//! ## Quick Start
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let a = new_set([1, 2, 3]);
//! let b = new_set([3, 4, 5]);
//!
//! let mut union = a.union(&b)?.to_vec();
//! union.sort();
//! assert_eq!(union, [1, 2, 3, 4, 5]);
//!
//! // Sets of different representations cannot be combined
//! let locked = new_concurrent_set([1, 2, 3]);
//! assert!(a.is_equal(&locked).is_err());
//! # Ok::<(), SetError>(())
//! ```
//!
//! ## Element types
//!
//! Anything implementing `Eq + Hash` works: integers, strings, booleans,
//! characters, tuples and derived structs. Floating point values do not
//! implement `Eq`; wrap them in [`Float`] or [`Complex`], which treat `0.0`
//! and `-0.0` as one element and every NaN as one element.
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let set = new_set([Float::new(0.0), Float::new(-0.0)]);
//! assert_eq!(set.len(), 1);
//! ```
//!
//! [`PlainSet`]: crate::sets::PlainSet
//! [`ConcurrentSet`]: crate::sets::ConcurrentSet
//! [`Float`]: crate::element::Float
//! [`Complex`]: crate::element::Complex

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core infrastructure modules
pub mod element;
pub mod error;
pub mod store;
pub mod traits;

// Set implementations
pub mod sets;

pub use sets::{AnySet, ConcurrentSet, PlainSet, new_concurrent_set, new_set};

/// Prelude module of setkit
///
/// Convenient re-exports for common setkit types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::{Representation, Set};

    // Re-export element wrappers
    pub use crate::element::{Complex, Float};

    // Re-export error types
    pub use crate::error::{SetError, SetResult};

    // Re-export set types and constructors
    pub use crate::sets::{AnySet, ConcurrentSet, PlainSet, new_concurrent_set, new_set};
}
