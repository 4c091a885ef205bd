//! Common utilities and shared code for property-based testing of sets
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Common generators for set contents
//! - Helper functions checking set-algebra properties through the `Set` trait,
//!   so every representation runs the same checks

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use proptest::prelude::*;
use setkit::prelude::*;
use std::collections::HashSet;

/// Standard proptest configuration for set property tests
pub fn set_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        timeout: 2000, // 2 second timeout
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for multi-threaded tests (fewer cases, longer timeout)
pub fn concurrent_config() -> ProptestConfig {
    ProptestConfig {
        cases: 16,
        max_shrink_iters: 50,
        timeout: 10000,
        ..ProptestConfig::default()
    }
}

/// Installs a logger once per test binary
pub fn init_logger() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Off)
        .with_module_level("setkit", log::LevelFilter::Trace)
        .init();
}

/// Generate element values from a small domain so sets overlap often
pub fn element_strategy() -> impl Strategy<Value = u32> {
    0u32..64
}

/// Generate the contents of a set, duplicates included
pub fn elements_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(element_strategy(), 0..32)
}

/// Builds a set of any representation through the `Set` trait
pub fn build<S>(elements: &[u32]) -> S
where
    S: Set<u32> + Default,
{
    let mut set = S::default();
    for &element in elements {
        set.add(element);
    }
    set
}

/// Reference model built with the standard library
pub fn model(elements: &[u32]) -> HashSet<u32> {
    elements.iter().copied().collect()
}

/// Checks that a set holds exactly the elements of the model, each once
pub fn matches_model<S>(set: &S, model: &HashSet<u32>) -> bool
where
    S: Set<u32>,
{
    let elements = set.to_vec();
    let distinct: HashSet<u32> = elements.iter().copied().collect();

    elements.len() == distinct.len()
        && set.len() == model.len()
        && set.is_empty() == model.is_empty()
        && &distinct == model
}

/// Helper function to verify that equality is reflexive and symmetric
pub fn assert_equality_reflexive_symmetric<S>(a: &S, b: &S) -> bool
where
    S: Set<u32>,
{
    a.is_equal(a) && b.is_equal(b) && a.is_equal(b) == b.is_equal(a)
}

/// Helper function to verify that equality is transitive
pub fn assert_equality_transitive<S>(a: &S, b: &S, c: &S) -> bool
where
    S: Set<u32>,
{
    !(a.is_equal(b) && b.is_equal(c)) || a.is_equal(c)
}

/// Helper function to verify union identities
/// For any set a: a ∪ a = a and a ∪ ∅ = a
pub fn assert_union_identity<S>(a: &S) -> bool
where
    S: Set<u32> + Default,
{
    let empty = S::default();
    a.union(a).is_equal(a) && a.union(&empty).is_equal(a) && empty.union(a).is_equal(a)
}

/// Helper function to verify that binary operations leave their operands untouched
pub fn assert_operands_unchanged<S>(a: &S, b: &S) -> bool
where
    S: Set<u32>,
{
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = a.union(b);
    let _ = a.intersection(b);
    let _ = a.difference(b);
    let _ = a.is_equal(b);

    a.is_equal(&a_before) && b.is_equal(&b_before)
}

/// Helper function to verify that a clone shares no storage with its source
pub fn assert_clone_independence<S>(a: &S, extra: u32) -> bool
where
    S: Set<u32>,
{
    let mut clone = a.clone();
    if !clone.is_equal(a) {
        return false;
    }

    let was_present = a.contains(&extra);
    clone.add(extra);
    clone.clear();

    clone.is_empty() && a.contains(&extra) == was_present && (a.is_empty() || !a.is_equal(&clone))
}
