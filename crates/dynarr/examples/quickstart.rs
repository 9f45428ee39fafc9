//! dynarr quickstart: fill an array, query extremes, drain it.
//!
//! Demonstrates:
//!   1. Building a `DynamicArray` of tracked elements
//!   2. Finding min/max with a three-way comparator
//!   3. Watching capacity follow the fixed-step resize policy
//!   4. Elements outliving the array through held handles
//!
//! Run with:
//!   cargo run --example quickstart

use dynarr::compare;
use dynarr::prelude::*;
use dynarr_test_utils::{DropCounter, Tracked};

fn main() -> Result<(), ArrayError> {
    let counter = DropCounter::new();
    let mut array: DynamicArray<Tracked> = DynamicArray::new();

    for _ in 0..11 {
        array.push_back(counter.spawn());
    }
    println!("len={} capacity={}", array.len(), array.capacity());

    let by_id = compare::three_way(|a: &Tracked, b: &Tracked| i64::from(a.id) - i64::from(b.id));
    let max = array.max_by(&by_id)?;
    let min = array.min_by(&by_id)?;
    println!("max id={} min id={}", max.id, min.id);

    for _ in 0..10 {
        array.pop_back();
    }
    println!(
        "after popping: len={} capacity={} dropped={}",
        array.len(),
        array.capacity(),
        counter.get()
    );

    drop(array);
    // `max` and `min` are still held here.
    println!("after drop: dropped={} (max id {} still alive)", counter.get(), max.id);

    let metrics_demo: DynamicArray<i32> = (0..50).collect();
    let m = metrics_demo.metrics();
    println!(
        "50 pushes: {} grows, {} slots copied, peak capacity {}",
        m.grow_events, m.slots_copied, m.peak_capacity
    );
    Ok(())
}
