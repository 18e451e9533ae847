//! Min-heap benchmarking harness
//!
//! This crate provides two min-heaps behind a common [`Heap`] trait and a
//! harness that times them over datasets spanning several orders of magnitude.
//!
//! # Features
//!
//! - **Binary Heap** ([`binary::MinHeap`]): array-backed, fixed capacity;
//!   O(log n) insert and extract_min, O(1) peek_min
//! - **Binomial Heap** ([`binomial::BinomialHeap`]): arena-backed forest of
//!   binomial trees; O(log n) insert and extract_min, O(1) peek_min, mergeable
//! - **Harness** ([`harness`]): bulk insert, repeated lookup and repeated
//!   extraction timings per dataset size
//!
//! # Example
//!
//! ```rust
//! use heap_bench::binary::MinHeap;
//! use heap_bench::Heap;
//!
//! let mut heap = MinHeap::with_capacity(3).unwrap();
//! heap.insert(10).unwrap();
//! heap.insert(4).unwrap();
//! heap.insert(15).unwrap();
//! assert_eq!(heap.extract_min(), Some(4));
//! assert_eq!(heap.peek_min(), Some(&10));
//! ```

pub mod binary;
pub mod binomial;
pub mod config;
pub mod harness;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{Heap, HeapError, MergeableHeap};
