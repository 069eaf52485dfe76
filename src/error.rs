//! Error type shared by the heap's fallible operations

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The requested branching factor cannot form a d-ary tree
    InvalidBranchingFactor(usize),
    /// The heap has no elements to extract
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidBranchingFactor(got) => {
                write!(f, "branching factor must be at least 2, got {got}")
            }
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}
