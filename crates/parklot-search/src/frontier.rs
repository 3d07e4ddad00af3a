//! Frontier primitives shared by the searches.
//!
//! - [`FifoFrontier`]: first in, first out (BFS).
//! - [`MinFrontier`]: smallest [`Prioritized::priority`] first, ties in
//!   insertion order (UCS, A*).
//! - [`PeakGauge`]: tracks the largest frontier length seen during a run.
//! - [`VisitedSet`]: flat per-spot membership flags for one lot.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use parklot_core::{Lot, Point};

/// A collection of candidates awaiting expansion.
pub trait Frontier {
    type Item;

    fn push(&mut self, item: Self::Item);

    /// Remove the next item in frontier order.
    fn pop(&mut self) -> Option<Self::Item>;

    /// Number of pending items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// First-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Frontier for FifoFrontier<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

// ---------------------------------------------------------------------------
// Min-priority
// ---------------------------------------------------------------------------

/// An item ordered by an integer priority; smaller pops first.
pub trait Prioritized {
    fn priority(&self) -> u32;
}

/// Heap entry ordered by `(priority, seq)`.
struct Entry<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority, then
        // earliest insertion, first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with stable (insertion-ordered) ties.
pub struct MinFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T: Prioritized> Default for MinFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Prioritized> MinFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T: Prioritized> Frontier for MinFrontier<T> {
    type Item = T;

    fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority: item.priority(),
            seq,
            item,
        });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// Instrumentation and bookkeeping
// ---------------------------------------------------------------------------

/// Records the maximum frontier length observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeakGauge {
    peak: usize,
}

impl PeakGauge {
    #[inline]
    pub fn record(&mut self, len: usize) {
        self.peak = self.peak.max(len);
    }

    #[inline]
    pub fn peak(self) -> usize {
        self.peak
    }
}

/// One flag per spot of a lot.
pub struct VisitedSet<'a> {
    lot: &'a Lot,
    seen: Vec<bool>,
}

impl<'a> VisitedSet<'a> {
    pub fn new(lot: &'a Lot) -> Self {
        Self {
            lot,
            seen: vec![false; lot.len()],
        }
    }

    /// Mark `p` as seen. Returns `true` if it was not seen before.
    /// Out-of-bounds points are never recorded.
    pub fn insert(&mut self, p: Point) -> bool {
        match self.lot.index(p) {
            Some(i) => !std::mem::replace(&mut self.seen[i], true),
            None => false,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.lot.index(p).is_some_and(|i| self.seen[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Job(u32, &'static str);

    impl Prioritized for Job {
        fn priority(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn fifo_preserves_order() {
        let mut q = FifoFrontier::new();
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn min_frontier_pops_lowest_priority() {
        let mut q = MinFrontier::new();
        q.push(Job(5, "e"));
        q.push(Job(1, "a"));
        q.push(Job(3, "c"));
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|j| j.1).collect();
        assert_eq!(order, vec!["a", "c", "e"]);
    }

    #[test]
    fn min_frontier_ties_pop_in_insertion_order() {
        let mut q = MinFrontier::new();
        q.push(Job(2, "first"));
        q.push(Job(1, "low"));
        q.push(Job(2, "second"));
        q.push(Job(2, "third"));
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|j| j.1).collect();
        assert_eq!(order, vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn peak_gauge_keeps_maximum() {
        let mut g = PeakGauge::default();
        assert_eq!(g.peak(), 0);
        for len in [1, 4, 2, 0, 3] {
            g.record(len);
        }
        assert_eq!(g.peak(), 4);
    }

    #[test]
    fn visited_set_tracks_membership() {
        let lot = Lot::new(3, 3);
        let mut v = VisitedSet::new(&lot);
        let p = Point::new(2, 2);
        assert!(!v.contains(p));
        assert!(v.insert(p));
        assert!(!v.insert(p));
        assert!(v.contains(p));
        assert!(!v.insert(Point::new(3, 0)));
        assert!(!v.contains(Point::new(3, 0)));
    }
}
