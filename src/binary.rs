//! Binary min-heap keyed by an `f64` cost
//!
//! An array-backed binary heap: the entry at index `i` has its parent at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Every parent's
//! cost is `<=` the costs of its children.
//!
//! Comparisons are strict (`<` / `>`), so two entries with equal cost are never
//! swapped. No ordering is guaranteed between tied entries.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `peek_min`    | O(1)       |
//! | `clear`       | O(n) drop  |
//!
//! # Example
//!
//! ```rust
//! use hotcold_heaps::binary::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(3.0, "three");
//! heap.insert(1.0, "one");
//! heap.insert(2.0, "two");
//!
//! assert_eq!(heap.peek_min(), Ok((1.0, &"one")));
//! assert_eq!(heap.extract_min(), Ok((1.0, "one")));
//! assert_eq!(heap.extract_min(), Ok((2.0, "two")));
//! assert_eq!(heap.extract_min(), Ok((3.0, "three")));
//! assert!(heap.extract_min().is_err());
//! ```

use crate::traits::{CostQueue, Entry, QueueError};
use std::cmp::Ordering;

/// A binary min-heap of `(cost, item)` pairs
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// The heap data stored as a vector of (cost, item) pairs
    data: Vec<Entry<T>>,
}

impl<T> MinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts an entry and restores the heap property upward
    pub fn insert(&mut self, cost: f64, item: T) {
        self.data.push((cost, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum entry without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueueAccess`] if the heap is empty.
    pub fn peek_min(&self) -> Result<(f64, &T), QueueError> {
        self.data
            .first()
            .map(|(cost, item)| (*cost, item))
            .ok_or(QueueError::EmptyQueueAccess)
    }

    /// Removes and returns the minimum entry
    ///
    /// The last entry takes the root slot and is sifted down.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueueAccess`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<Entry<T>, QueueError> {
        if self.data.is_empty() {
            return Err(QueueError::EmptyQueueAccess);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Removes every entry, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the heap property over the whole backing array
    ///
    /// A violation is a parent whose cost is strictly greater than a child's.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            self.data[(i - 1) / 2].0.partial_cmp(&self.data[i].0) != Some(Ordering::Greater)
        })
    }

    /// Consumes the heap and returns its entries in ascending cost order
    pub fn into_sorted_vec(mut self) -> Vec<Entry<T>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent].0 > self.data[index].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T> CostQueue<T> for MinHeap<T> {
    fn new() -> Self {
        MinHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, cost: f64, item: T) {
        self.insert(cost, item);
    }

    fn peek(&mut self) -> Option<(f64, &T)> {
        self.peek_min().ok()
    }

    fn pop(&mut self) -> Option<Entry<T>> {
        self.extract_min().ok()
    }

    fn clear(&mut self) {
        MinHeap::clear(self);
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Entry<T>> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        for (cost, item) in iter {
            self.insert(cost, item);
        }
    }
}

impl<T> FromIterator<Entry<T>> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(3.0, "three");
        heap.insert(1.0, "one");
        heap.insert(2.0, "two");

        assert!(!heap.is_empty());
        assert_eq!(heap.size(), 3);
        assert_eq!(heap.peek_min(), Ok((1.0, &"one")));

        assert_eq!(heap.extract_min(), Ok((1.0, "one")));
        assert_eq!(heap.extract_min(), Ok((2.0, "two")));
        assert_eq!(heap.extract_min(), Ok((3.0, "three")));
        assert_eq!(heap.extract_min(), Err(QueueError::EmptyQueueAccess));
    }

    #[test]
    fn test_empty_access() {
        let mut heap: MinHeap<u32> = MinHeap::new();
        assert_eq!(heap.peek_min(), Err(QueueError::EmptyQueueAccess));
        assert_eq!(heap.extract_min(), Err(QueueError::EmptyQueueAccess));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_single_element_clears_storage() {
        let mut heap = MinHeap::new();
        heap.insert(7.5, 'x');
        assert_eq!(heap.extract_min(), Ok((7.5, 'x')));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_costs() {
        let mut heap = MinHeap::new();

        heap.insert(1.0, "a");
        heap.insert(1.0, "b");
        heap.insert(1.0, "c");

        assert_eq!(heap.len(), 3);

        let mut popped: Vec<_> = (0..3).map(|_| heap.extract_min().unwrap()).collect();
        assert!(popped.iter().all(|(c, _)| *c == 1.0));
        popped.sort_by_key(|entry| entry.1);
        assert_eq!(popped, vec![(1.0, "a"), (1.0, "b"), (1.0, "c")]);
    }

    #[test]
    fn test_ties_do_not_move_root() {
        let mut heap = MinHeap::new();
        heap.insert(2.0, "first");
        heap.insert(2.0, "second");
        heap.insert(2.0, "third");
        assert_eq!(heap.peek_min(), Ok((2.0, &"first")));
    }

    #[test]
    fn test_negative_and_infinite_costs() {
        let mut heap = MinHeap::new();
        heap.insert(f64::INFINITY, "inf");
        heap.insert(-3.5, "neg");
        heap.insert(0.0, "zero");
        heap.insert(f64::NEG_INFINITY, "neg_inf");
        heap.insert(f64::MIN, "min");

        assert_eq!(heap.extract_min(), Ok((f64::NEG_INFINITY, "neg_inf")));
        assert_eq!(heap.extract_min(), Ok((f64::MIN, "min")));
        assert_eq!(heap.extract_min(), Ok((-3.5, "neg")));
        assert_eq!(heap.extract_min(), Ok((0.0, "zero")));
        assert_eq!(heap.extract_min(), Ok((f64::INFINITY, "inf")));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = MinHeap::new();

        for i in 0..100 {
            heap.insert(i as f64, i);
            assert!(heap.is_valid_heap());
        }

        for i in 0..100 {
            assert_eq!(heap.extract_min(), Ok((i as f64, i)));
            assert!(heap.is_valid_heap());
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MinHeap::new();

        for i in (0..100).rev() {
            heap.insert(i as f64, i);
        }
        assert!(heap.is_valid_heap());

        for i in 0..100 {
            assert_eq!(heap.extract_min(), Ok((i as f64, i)));
        }
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap = MinHeap::with_capacity(16);
        for i in 0..10 {
            heap.insert(i as f64, i);
        }
        let capacity = heap.capacity();
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), capacity);
        assert!(heap.peek_min().is_err());
    }

    #[test]
    fn test_from_iter_and_sorted_vec() {
        let heap: MinHeap<char> = vec![(2.5, 'b'), (-1.0, 'a'), (9.0, 'c')].into_iter().collect();
        assert_eq!(heap.len(), 3);
        assert_eq!(
            heap.into_sorted_vec(),
            vec![(-1.0, 'a'), (2.5, 'b'), (9.0, 'c')]
        );
    }

    #[test]
    fn test_cost_queue_trait() {
        fn fill<Q: CostQueue<u8>>(q: &mut Q) {
            q.push(4.0, 4);
            q.push(2.0, 2);
        }

        let mut heap = MinHeap::new();
        fill(&mut heap);
        assert_eq!(CostQueue::peek(&mut heap), Some((2.0, &2)));
        assert_eq!(CostQueue::pop(&mut heap), Some((2.0, 2)));
        CostQueue::clear(&mut heap);
        assert_eq!(CostQueue::pop(&mut heap), None);
    }
}
