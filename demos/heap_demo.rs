//! Demonstration of the d-ary max-heap
//!
//! Builds a heap with two children per node, inserts a scripted value
//! sequence, drains it while printing each maximum, and finishes by
//! exercising the empty-heap error path.

use dary_max_heap::{DaryMaxHeap, HeapError};

fn main() -> Result<(), HeapError> {
    let mut heap = DaryMaxHeap::new(2)?;

    for value in [10, 20, 5, 30, 25] {
        heap.push(value);
    }
    println!(
        "inserted {} values into a {}-ary heap, current max: {:?}",
        heap.len(),
        heap.branching_factor(),
        heap.peek()
    );

    while !heap.is_empty() {
        println!("popped {}", heap.pop_max()?);
    }

    // One more pop on the drained heap to show the error path
    match heap.pop_max() {
        Ok(value) => println!("popped {value}"),
        Err(err) => println!("cannot pop: {err}"),
    }

    Ok(())
}
