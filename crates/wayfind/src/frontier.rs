//! Priority frontier for best-first searches.
//!
//! Items are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are extracted first; ties are broken by insertion order
//! (FIFO). An item's priority is read once, when it is inserted.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use thiserror::Error;

/// Something that can be ordered in a [`PriorityFrontier`].
pub trait Prioritized {
    /// Current priority. Lower values are extracted first.
    fn priority(&self) -> f32;
}

/// Returned by [`PriorityFrontier::extract_min`] when there is nothing left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("extract_min called on an empty frontier")]
pub struct EmptyFrontier;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: f32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`. `total_cmp`
        // sorts NaN after every finite priority.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier. Duplicate items are allowed and are extracted
/// independently.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T: Prioritized> PriorityFrontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty frontier with room for `cap` items.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            seq: 0,
        }
    }

    /// Insert `item` at its current priority.
    pub fn insert(&mut self, item: T) {
        let seq = self.seq;
        self.seq += 1;
        let priority = item.priority();
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove and return the item with the lowest priority (ties FIFO).
    pub fn extract_min(&mut self) -> Result<T, EmptyFrontier> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.item)
            .ok_or(EmptyFrontier)
    }

    /// Priority of the item [`extract_min`](Self::extract_min) would return.
    pub fn peek_priority(&self) -> Option<f32> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    /// Number of items in the frontier.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every item, keeping the allocation. Restarts tie-breaking.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

impl<T: Prioritized> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        priority: f32,
    }

    impl Prioritized for Item {
        fn priority(&self) -> f32 {
            self.priority
        }
    }

    fn item(name: &'static str, priority: f32) -> Item {
        Item { name, priority }
    }

    fn drain(f: &mut PriorityFrontier<Item>) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Ok(it) = f.extract_min() {
            out.push(it.name);
        }
        out
    }

    #[test]
    fn extracts_in_priority_order() {
        let mut f = PriorityFrontier::new();
        f.insert(item("a", 3.0));
        f.insert(item("b", 1.0));
        f.insert(item("c", 2.0));

        assert_eq!(drain(&mut f), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = PriorityFrontier::new();
        f.insert(item("first", 1.0));
        f.insert(item("second", 1.0));
        f.insert(item("low", 0.5));
        f.insert(item("third", 1.0));

        assert_eq!(drain(&mut f), vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn empty_extract_fails() {
        let mut f = PriorityFrontier::<Item>::new();
        assert_eq!(f.extract_min(), Err(EmptyFrontier));

        f.insert(item("x", 0.0));
        assert!(f.extract_min().is_ok());
        assert_eq!(f.extract_min(), Err(EmptyFrontier));
    }

    #[test]
    fn size_tracks_inserts_and_extracts() {
        let mut f = PriorityFrontier::new();
        assert_eq!(f.size(), 0);
        assert!(f.is_empty());

        f.insert(item("x", 2.0));
        f.insert(item("x", 1.0));
        assert_eq!(f.size(), 2);
        // Querying does not consume anything.
        assert_eq!(f.size(), 2);

        let it = f.extract_min().unwrap();
        assert_eq!(it.priority, 1.0);
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = PriorityFrontier::new();
        f.insert(item("n", 5.0));
        f.insert(item("n", 2.0));
        assert_eq!(f.size(), 2);
        assert_eq!(f.extract_min().unwrap().priority, 2.0);
        assert_eq!(f.extract_min().unwrap().priority, 5.0);
    }

    #[test]
    fn nan_sorts_last() {
        let mut f = PriorityFrontier::new();
        f.insert(item("nan", f32::NAN));
        f.insert(item("inf", f32::INFINITY));
        f.insert(item("one", 1.0));

        assert_eq!(drain(&mut f), vec!["one", "inf", "nan"]);
    }

    #[test]
    fn peek_and_clear() {
        let mut f = PriorityFrontier::new();
        assert_eq!(f.peek_priority(), None);
        f.insert(item("a", 4.0));
        f.insert(item("b", 2.5));
        assert_eq!(f.peek_priority(), Some(2.5));

        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.peek_priority(), None);
    }

    #[test]
    fn non_decreasing_over_many_inserts() {
        let mut f = PriorityFrontier::new();
        // Deterministic scramble of 0..97.
        for i in 0..97u32 {
            let p = ((i * 37) % 97) as f32 / 4.0;
            f.insert(item("x", p));
        }
        let mut last = f32::NEG_INFINITY;
        let mut count = 0;
        while let Ok(it) = f.extract_min() {
            assert!(it.priority >= last);
            last = it.priority;
            count += 1;
        }
        assert_eq!(count, 97);
    }
}
