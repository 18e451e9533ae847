//! Bounded binary min-heap
//!
//! An array-backed binary min-heap with a capacity fixed at construction.
//! The tree is stored implicitly: the children of index `i` live at `2i + 1`
//! and `2i + 2`, its parent at `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use heap_bench::Heap;
//! use heap_bench::binary::MinHeap;
//!
//! let mut heap = MinHeap::with_capacity(6).unwrap();
//! for key in [5, 3, 8, 1, 9, 2] {
//!     heap.insert(key).unwrap();
//! }
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.extract_min()).collect();
//! assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
//! ```

use crate::traits::{Heap, HeapError};

/// A binary min-heap that never grows past its construction capacity
///
/// Inserting into a full heap is rejected with
/// [`HeapError::CapacityOverflow`] and leaves the heap unchanged.
#[derive(Debug, Clone)]
pub struct MinHeap<K: Ord> {
    /// Live keys in heap order; `storage.len()` is the heap size
    storage: Vec<K>,
    capacity: usize,
}

impl<K: Ord> MinHeap<K> {
    /// Creates an empty heap with room for exactly `capacity` keys
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        let mut storage = Vec::new();
        storage.reserve_exact(capacity);
        Ok(Self { storage, capacity })
    }

    /// Maximum number of keys the heap can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true when a further insert would overflow
    pub fn is_full(&self) -> bool {
        self.storage.len() == self.capacity
    }

    /// Live keys in heap (array) order
    pub fn as_slice(&self) -> &[K] {
        &self.storage
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.storage[index] < self.storage[parent] {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Ties keep the current index, then prefer the left child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.storage[left] < self.storage[smallest] {
                smallest = left;
            }
            if right < len && self.storage[right] < self.storage[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.storage.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<K: Ord> Heap<K> for MinHeap<K> {
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn insert(&mut self, key: K) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityOverflow {
                capacity: self.capacity,
            });
        }
        self.storage.push(key);
        self.sift_up(self.storage.len() - 1);
        Ok(())
    }

    fn peek_min(&self) -> Option<&K> {
        self.storage.first()
    }

    fn extract_min(&mut self) -> Option<K> {
        if self.storage.is_empty() {
            return None;
        }

        // swap_remove moves the last live key into the root slot
        let root = self.storage.swap_remove(0);
        if self.storage.len() > 1 {
            self.sift_down(0);
        }
        Some(root)
    }
}
