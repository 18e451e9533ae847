//! Common traits for heap data structures
//!
//! This module provides the small trait hierarchy shared by the heaps in this crate:
//!
//! - [`Heap`]: Base trait with insert, peek-min and extract-min
//! - [`MergeableHeap`]: Extension for heaps that can absorb another heap of the same type
//!
//! Empty results are reported with `Option::None` rather than a sentinel key,
//! so every value of `K` stays a legal key.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A bounded heap was requested with zero capacity
    ZeroCapacity,
    /// The heap is full; the key was not inserted
    CapacityOverflow {
        /// Fixed capacity of the heap that rejected the key
        capacity: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::ZeroCapacity => {
                write!(f, "heap capacity must be positive")
            }
            HeapError::CapacityOverflow { capacity } => {
                write!(f, "overflow: heap is full (capacity {capacity})")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap data structures
///
/// # Example
///
/// ```rust
/// use heap_bench::Heap;
/// use heap_bench::binary::MinHeap;
///
/// let mut heap = MinHeap::with_capacity(3).unwrap();
/// heap.insert(10).unwrap();
/// heap.insert(4).unwrap();
/// heap.insert(15).unwrap();
///
/// assert_eq!(heap.peek_min(), Some(&4));
/// assert_eq!(heap.extract_min(), Some(4));
/// assert_eq!(heap.peek_min(), Some(&10));
/// ```
pub trait Heap<K: Ord> {
    /// Returns the number of live keys in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a key
    ///
    /// # Errors
    /// Bounded heaps return [`HeapError::CapacityOverflow`] when full and
    /// leave their contents untouched. Unbounded heaps never fail.
    ///
    /// # Time Complexity
    /// O(log n) for every heap in this crate.
    fn insert(&mut self, key: K) -> Result<(), HeapError>;

    /// Returns the minimum key without removing it, or `None` when empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` when empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_min(&mut self) -> Option<K>;
}

/// Heaps that can merge another heap of the same type into themselves
pub trait MergeableHeap<K: Ord>: Heap<K> {
    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
