use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered by `(priority, sequence)` only, so the payload needs no
/// ordering of its own.
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    sequence: u64,
    vertex: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue over a `BinaryHeap` for shortest path algorithms.
///
/// Equal priorities pop in insertion order. There is no decrease-key: callers
/// push a new entry and skip stale ones when they come out.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<V, P>>>,

    /// Next insertion sequence number
    next_sequence: u64,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry {
            priority,
            sequence,
            vertex,
        }));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
