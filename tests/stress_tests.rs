//! Stress tests that push the heaps through large workloads
//!
//! These mirror the benchmark's shape (bulk insert, repeated peek, repeated
//! extract) at sizes large enough to catch structural bugs.

use heap_bench::binary::MinHeap;
use heap_bench::binomial::BinomialHeap;
use heap_bench::harness::generate_dataset;
use heap_bench::{Heap, MergeableHeap};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Bulk insert random keys, then extract everything in order
fn test_massive_operations<H: Heap<i32>>(mut heap: H) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let data = generate_dataset(&mut rng, 100_000, 1_000_000);
    for &key in &data {
        heap.insert(key).unwrap();
    }
    assert_eq!(heap.len(), data.len());

    let mut sorted = data.clone();
    sorted.sort_unstable();
    assert_eq!(heap.peek_min(), sorted.first());

    for expected in sorted {
        assert_eq!(heap.extract_min(), Some(expected));
    }
    assert!(heap.is_empty());
}

/// Repeated lookups never change the observed minimum
fn test_repeated_peeks<H: Heap<i32>>(mut heap: H) {
    for key in (0..10_000).rev() {
        heap.insert(key).unwrap();
    }
    for _ in 0..1_000 {
        assert_eq!(heap.peek_min(), Some(&0));
    }
    assert_eq!(heap.len(), 10_000);
}

/// Extracting past the end keeps returning None
fn test_extract_past_empty<H: Heap<i32>>(mut heap: H) {
    for key in 0..100 {
        heap.insert(key).unwrap();
    }
    let empties = (0..1_000).filter(|_| heap.extract_min().is_none()).count();
    assert_eq!(empties, 900);
    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>(mut heap: H) {
    for i in 0..2_000 {
        heap.insert(i * 2).unwrap();
        heap.insert(i * 2 + 1).unwrap();
        assert!(heap.extract_min().is_some());
    }
    assert_eq!(heap.len(), 2_000);

    let mut last = i32::MIN;
    while let Some(key) = heap.extract_min() {
        assert!(key >= last);
        last = key;
    }
}

#[test]
fn test_min_heap_massive_operations() {
    test_massive_operations(MinHeap::with_capacity(100_000).unwrap());
}

#[test]
fn test_binomial_heap_massive_operations() {
    test_massive_operations(BinomialHeap::new());
}

#[test]
fn test_min_heap_repeated_peeks() {
    test_repeated_peeks(MinHeap::with_capacity(10_000).unwrap());
}

#[test]
fn test_binomial_heap_repeated_peeks() {
    test_repeated_peeks(BinomialHeap::new());
}

#[test]
fn test_min_heap_extract_past_empty() {
    test_extract_past_empty(MinHeap::with_capacity(100).unwrap());
}

#[test]
fn test_binomial_heap_extract_past_empty() {
    test_extract_past_empty(BinomialHeap::new());
}

#[test]
fn test_min_heap_alternating_ops() {
    test_alternating_ops(MinHeap::with_capacity(4_000).unwrap());
}

#[test]
fn test_binomial_heap_alternating_ops() {
    test_alternating_ops(BinomialHeap::new());
}

#[test]
fn test_min_heap_overflow_under_load() {
    let mut heap = MinHeap::with_capacity(1_000).unwrap();
    for key in 0..1_000 {
        heap.insert(key).unwrap();
    }
    let rejected = (0..500).filter(|&k| heap.insert(-k).is_err()).count();
    assert_eq!(rejected, 500);
    assert_eq!(heap.peek_min(), Some(&0));
    assert_eq!(heap.len(), 1_000);
}

#[test]
fn test_binomial_many_merges() {
    let mut heap = BinomialHeap::new();
    for chunk in 0..64 {
        let mut part = BinomialHeap::new();
        for i in 0..(chunk + 1) {
            part.insert(chunk * 1_000 + i).unwrap();
        }
        heap.merge(part);
    }
    assert_eq!(heap.len(), (1..=64).sum::<i32>() as usize);

    let mut last = i32::MIN;
    while let Some(key) = heap.extract_min() {
        assert!(key >= last);
        last = key;
    }
}
