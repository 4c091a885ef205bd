//! Walkthrough of the setkit API
//!
//! Run with `cargo run --example set_operations`. Set `RUST_LOG=trace` to see
//! the lock ordering chosen by concurrent binary operations.

use std::sync::Arc;
use std::thread;

use setkit::prelude::*;

const WORKERS: u32 = 5;
const OPS_PER_WORKER: u32 = 5;

fn sorted<T: Ord + Clone + Eq + std::hash::Hash>(set: &AnySet<T>) -> Vec<T> {
    let mut values = set.to_vec();
    values.sort();
    values
}

fn plain_demo() -> SetResult<()> {
    println!("=== Single-threaded set ===");

    let mut set = new_set(["a", "b"]);
    set.add("c");
    set.add("d");
    println!("Set: {:?}", sorted(&set));

    set.add("a");
    println!("After adding a duplicate: {:?}", sorted(&set));

    println!("Contains 'a': {}", set.contains(&"a"));
    println!("Contains 'e': {}", set.contains(&"e"));

    set.remove(&"b");
    println!("After removing 'b': {:?}", sorted(&set));
    set.remove(&"e");
    println!("After removing absent 'e': {:?}", sorted(&set));

    let other = new_set(["a", "c", "d"]);
    println!(
        "Equal to {:?}: {}",
        sorted(&other),
        set.is_equal(&other)?
    );
    println!("Size: {}", set.len());

    set.clear();
    println!("After clearing: {:?}, empty: {}", sorted(&set), set.is_empty());
    Ok(())
}

fn concurrent_demo() {
    println!("=== Concurrent set ===");
    println!("{WORKERS} workers x {OPS_PER_WORKER} values, removing even numbers");

    let set = Arc::new(ConcurrentSet::new());
    let handles: Vec<_> = (0..WORKERS)
        .map(|base| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for offset in 0..OPS_PER_WORKER {
                    let value = base * OPS_PER_WORKER + offset;
                    set.add(value);
                    if value % 2 == 0 {
                        set.remove(&value);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a worker panicked");
        }
    }

    let mut values = set.to_vec();
    values.sort();
    if let Some(even) = values.iter().find(|value| *value % 2 == 0) {
        println!("Unexpected even number {even} in the set");
    }
    println!("Found {} odd numbers: {values:?}", values.len());
}

fn algebra_demo() -> SetResult<()> {
    println!("=== Set algebra ===");

    let a = new_set([1, 2, 3]);
    let b = new_set([3, 4, 5]);
    println!("A: {:?}", sorted(&a));
    println!("B: {:?}", sorted(&b));

    println!("Union: {:?}", sorted(&a.union(&b)?));
    println!("Intersection: {:?}", sorted(&a.intersection(&b)?));
    println!("Difference: {:?}", sorted(&a.difference(&b)?));

    let clone = a.clone();
    println!("Clone: {:?}, equal to A: {}", sorted(&clone), clone.is_equal(&a)?);

    let locked = new_concurrent_set([1, 2, 3]);
    match a.is_equal(&locked) {
        Ok(equal) => println!("Compared across representations: {equal}"),
        Err(error) => println!("Refused to compare: {error}"),
    }
    Ok(())
}

fn main() -> SetResult<()> {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init();

    plain_demo()?;
    concurrent_demo();
    algebra_demo()
}
