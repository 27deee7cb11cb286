//! Minimal min-priority queue used by Dijkstra and A*
//!
//! No decrease-key: callers enqueue again on improvement and skip stale
//! entries when they come out. Equal priorities leave in insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by priority, then insertion)
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub element: T,
    pub priority: f64,
    seq: u64,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Stable min-priority queue over `(element, priority)` pairs
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, element: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            element,
            priority,
            seq,
        }));
    }

    /// Remove and return the lowest-priority pair
    pub fn dequeue(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.element, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
