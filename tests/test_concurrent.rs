//! Multi-threaded tests for the reader/writer-locked set
//!
//! This module checks the behaviour of `ConcurrentSet` under parallel use:
//! - No lost updates: disjoint writers all land
//! - Consistency: removals interleaved with additions are applied exactly once
//! - Deadlock freedom: symmetric binary operations with writers queued on both sets
//! - Readers observe valid states while writers run

#![allow(special_module_name)]

use proptest::prelude::*;
use setkit::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

mod lib;
use lib::*;

/// Each worker adds a disjoint block of integers, removing the even ones as it goes
fn run_add_remove_workers(set: &Arc<ConcurrentSet<u32>>, workers: u32, block: u32) {
    let handles: Vec<_> = (0..workers)
        .map(|worker| {
            let set = Arc::clone(set);
            thread::spawn(move || {
                for offset in 0..block {
                    let value = worker * block + offset;
                    set.add(value);
                    if value % 2 == 0 {
                        set.remove(&value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn only_odd_numbers_survive() {
    init_logger();

    let set = Arc::new(ConcurrentSet::new());
    run_add_remove_workers(&set, 5, 5);

    let elements = set.to_vec();
    let distinct: HashSet<u32> = elements.iter().copied().collect();
    let expected: HashSet<u32> = (0..25).filter(|value| value % 2 == 1).collect();

    assert_eq!(elements.len(), distinct.len());
    assert_eq!(distinct, expected);
}

#[test]
fn stress_many_workers() {
    let set = Arc::new(ConcurrentSet::new());
    run_add_remove_workers(&set, 16, 1000);

    assert_eq!(set.len(), 8000);
    assert!(set.to_vec().iter().all(|value| value % 2 == 1));
}

#[test]
fn symmetric_binary_operations_complete() {
    init_logger();

    let a: ConcurrentSet<u32> = (0..100).collect();
    let b: ConcurrentSet<u32> = (50..150).collect();
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        // Writers keep both locks contended while the readers run
        for set in [&a, &b] {
            let done = &done;
            scope.spawn(move || {
                let mut value = 10_000;
                while !done.load(Ordering::Relaxed) {
                    set.add(value);
                    set.remove(&value);
                    value += 1;
                }
            });
        }

        let forward = scope.spawn(|| {
            for _ in 0..1000 {
                let _ = a.is_equal(&b);
                let _ = a.union(&b);
                let _ = a.difference(&b);
            }
        });
        let backward = scope.spawn(|| {
            for _ in 0..1000 {
                let _ = b.is_equal(&a);
                let _ = b.intersection(&a);
                let _ = b.is_subset(&a);
            }
        });

        forward.join().unwrap();
        backward.join().unwrap();
        done.store(true, Ordering::Relaxed);
    });

    let shared: HashSet<u32> = a.intersection(&b).to_vec().into_iter().collect();
    assert_eq!(shared, (50..100).collect::<HashSet<u32>>());
}

#[test]
fn readers_see_valid_states() {
    let set: ConcurrentSet<u32> = ConcurrentSet::new();
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            for value in 0..2000 {
                set.add(value);
            }
            done.store(true, Ordering::Release);
        });

        scope.spawn(|| {
            // With a single writer that only adds, observed sizes never shrink
            let mut last = 0;
            while !done.load(Ordering::Acquire) {
                let snapshot = set.snapshot();
                assert!(snapshot.len() >= last);
                assert_eq!(snapshot.is_empty(), snapshot.len() == 0);
                last = snapshot.len();
            }
        });
    });

    assert_eq!(set.len(), 2000);
}

#[test]
fn clone_while_writing() {
    let set: ConcurrentSet<u32> = (0..100).collect();

    thread::scope(|scope| {
        scope.spawn(|| {
            for value in 100..1100 {
                set.add(value);
            }
        });

        for _ in 0..100 {
            let clone = set.clone();
            // A clone is a consistent prefix of the writer's progress
            let len = clone.len() as u32;
            assert!(clone.to_vec().iter().all(|&value| value < len));
        }
    });
}

proptest! {
    #![proptest_config(concurrent_config())]

    /// Property: concurrent writers on disjoint blocks lose no updates
    #[test]
    fn concurrent_blocks_are_all_applied(
        workers in 1u32..8,
        block in 1u32..200,
    ) {
        let set = Arc::new(ConcurrentSet::new());
        run_add_remove_workers(&set, workers, block);

        let expected: HashSet<u32> = (0..workers * block).filter(|value| value % 2 == 1).collect();
        prop_assert!(matches_model(&*set, &expected));
    }
}
