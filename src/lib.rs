//! D-ary Max-Heap
//!
//! This crate provides an array-backed max-priority-queue whose tree
//! arity is configurable: each node may have up to `d` children, with
//! `d` (the branching factor) chosen at construction. The tree is
//! implicit — elements live in a single `Vec` in level order, and
//! parent/child relationships are computed by index arithmetic.
//!
//! # Features
//!
//! - **Configurable branching factor**: any `d >= 2`; `d = 2` is a
//!   classic binary max-heap, larger factors trade a wider per-level
//!   child scan on extraction for a shallower tree on insertion
//! - **O(log_d n) push**, O(d · log_d n) pop, O(1) peek
//! - **O(n) heapify** from an arbitrarily ordered vector
//! - **Explicit errors**: construction with a degenerate branching
//!   factor and extraction from an empty heap both return a typed
//!   [`HeapError`] instead of panicking
//!
//! # Example
//!
//! ```rust
//! use dary_max_heap::{DaryMaxHeap, HeapError};
//!
//! let mut heap = DaryMaxHeap::new(2).unwrap();
//! heap.push(10);
//! heap.push(30);
//! heap.push(20);
//!
//! assert_eq!(heap.pop_max(), Ok(30));
//! assert_eq!(heap.pop_max(), Ok(20));
//! assert_eq!(heap.pop_max(), Ok(10));
//! assert_eq!(heap.pop_max(), Err(HeapError::Empty));
//! ```

pub mod dary;
pub mod error;

// Re-export the main types for convenience
pub use dary::DaryMaxHeap;
pub use error::HeapError;
