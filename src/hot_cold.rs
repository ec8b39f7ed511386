//! Hot/Cold priority queue
//!
//! A priority queue keyed by `f64` cost built from two [`MinHeap`]s and a pair of
//! thresholds. Entries that are already due (cost `<=` the hot threshold) go
//! straight into the **hot** heap, which serves `dequeue` and `peek`. Everything
//! else accumulates in the **cold** heap without disturbing the hot heap's shape.
//! When the hot heap runs dry, the two heaps trade roles in O(1) and the hot
//! threshold moves up to the largest cost ever routed to cold.
//!
//! This is the amortization idea behind calendar queues and bucketed open lists:
//! a batch of not-yet-relevant entries is adopted wholesale instead of being
//! merged into the working set one sift at a time.
//!
//! # Thresholds
//!
//! Both thresholds start at `f64::MIN`, so the first round of insertions lands in
//! cold and the first `dequeue` or `peek` performs a role swap. The cold threshold
//! is only ever widened by `enqueue` and is reset solely by [`clear`](HotColdQueue::clear);
//! a role swap copies it into the hot threshold but leaves it in place. Ordering
//! is always derived from heap contents, so this affects routing only.
//!
//! # Time Complexity
//!
//! | Operation | Complexity        |
//! |-----------|-------------------|
//! | `enqueue` | O(log n)          |
//! | `dequeue` | O(log n)          |
//! | `peek`    | O(1)              |
//! | role swap | O(1)              |
//!
//! # Example
//!
//! ```rust
//! use hotcold_heaps::hot_cold::HotColdQueue;
//!
//! let mut queue = HotColdQueue::new();
//! queue.enqueue(5.0, "a");
//! queue.enqueue(1.0, "b");
//! queue.enqueue(10.0, "c");
//!
//! assert_eq!(queue.dequeue(), Ok((1.0, "b")));
//! assert_eq!(queue.dequeue(), Ok((5.0, "a")));
//! assert_eq!(queue.dequeue(), Ok((10.0, "c")));
//! assert!(queue.dequeue().is_err());
//! ```

use crate::binary::MinHeap;
use crate::traits::{CostQueue, Entry, QueueError};
use log::trace;
use std::mem;

/// Threshold value of a fresh or cleared queue
const INITIAL_THRESHOLD: f64 = f64::MIN;

/// A two-heap priority queue that defers higher-cost insertions
#[derive(Debug, Clone)]
pub struct HotColdQueue<T> {
    hot: MinHeap<T>,
    cold: MinHeap<T>,
    /// Entries with cost `<=` this go directly into `hot`
    hot_threshold: f64,
    /// Largest cost routed to `cold` since creation or the last `clear`
    cold_threshold: f64,
    count: usize,
    role_swaps: u64,
}

impl<T> HotColdQueue<T> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::from_heaps(MinHeap::new(), MinHeap::new())
    }

    /// Creates an empty queue whose heaps each have room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_heaps(
            MinHeap::with_capacity(capacity),
            MinHeap::with_capacity(capacity),
        )
    }

    fn from_heaps(hot: MinHeap<T>, cold: MinHeap<T>) -> Self {
        HotColdQueue {
            hot,
            cold,
            hot_threshold: INITIAL_THRESHOLD,
            cold_threshold: INITIAL_THRESHOLD,
            count: 0,
            role_swaps: 0,
        }
    }

    /// Total number of live entries across both heaps
    pub fn len(&self) -> usize {
        self.count
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.count
    }

    /// Returns true if neither heap holds an entry
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Inserts an entry, routing it to the hot or cold heap
    ///
    /// Any cost is accepted, including negative and infinite values.
    pub fn enqueue(&mut self, cost: f64, item: T) {
        if cost <= self.hot_threshold {
            self.hot.insert(cost, item);
        } else {
            self.cold.insert(cost, item);
            if cost > self.cold_threshold {
                self.cold_threshold = cost;
            }
        }
        self.count += 1;
    }

    /// Removes and returns the minimum-cost entry
    ///
    /// If the hot heap is empty the heaps swap roles first.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueueAccess`] if the queue is empty. The
    /// count is left unchanged in that case.
    pub fn dequeue(&mut self) -> Result<Entry<T>, QueueError> {
        self.promote_cold_if_drained();
        let entry = self.hot.extract_min()?;
        self.count -= 1;
        Ok(entry)
    }

    /// Returns the minimum-cost entry without removing it
    ///
    /// Like [`dequeue`](Self::dequeue) this swaps heap roles when the hot heap is
    /// empty, which is why it needs `&mut self`. The stored entries are unchanged.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueueAccess`] if the queue is empty.
    pub fn peek(&mut self) -> Result<(f64, &T), QueueError> {
        self.promote_cold_if_drained();
        self.hot.peek_min()
    }

    /// Removes every entry and restores the thresholds of a fresh queue
    pub fn clear(&mut self) {
        self.hot.clear();
        self.cold.clear();
        self.hot_threshold = INITIAL_THRESHOLD;
        self.cold_threshold = INITIAL_THRESHOLD;
        self.count = 0;
        self.role_swaps = 0;
        trace!("hot/cold queue cleared");
    }

    /// Number of entries in the heap currently serving extractions
    pub fn hot_len(&self) -> usize {
        self.hot.len()
    }

    /// Number of entries waiting in the cold heap
    pub fn cold_len(&self) -> usize {
        self.cold.len()
    }

    /// Costs at or below this are routed straight to the hot heap
    pub fn hot_threshold(&self) -> f64 {
        self.hot_threshold
    }

    /// Largest cost routed to the cold heap since creation or the last `clear`
    pub fn cold_threshold(&self) -> f64 {
        self.cold_threshold
    }

    /// Number of role swaps since creation or the last `clear`
    pub fn role_swaps(&self) -> u64 {
        self.role_swaps
    }

    /// Checks the heap property of both internal heaps
    pub fn is_valid(&self) -> bool {
        self.hot.is_valid_heap()
            && self.cold.is_valid_heap()
            && self.hot.len() + self.cold.len() == self.count
    }

    /// Returns an iterator that dequeues every entry in ascending cost order
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { queue: self }
    }

    /// Swaps hot and cold when hot has nothing left to serve
    fn promote_cold_if_drained(&mut self) {
        if !self.hot.is_empty() {
            return;
        }

        mem::swap(&mut self.hot, &mut self.cold);
        self.hot_threshold = self.cold_threshold;
        self.role_swaps += 1;
        trace!(
            "hot/cold role swap #{}: {} entries now hot, threshold {}",
            self.role_swaps,
            self.hot.len(),
            self.hot_threshold
        );
    }
}

/// Draining iterator returned by [`HotColdQueue::drain_sorted`]
///
/// Entries not consumed before the iterator is dropped stay in the queue.
#[derive(Debug)]
pub struct DrainSorted<'a, T> {
    queue: &'a mut HotColdQueue<T>,
}

impl<T> Iterator for DrainSorted<'_, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T> CostQueue<T> for HotColdQueue<T> {
    fn new() -> Self {
        HotColdQueue::new()
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, cost: f64, item: T) {
        self.enqueue(cost, item);
    }

    fn peek(&mut self) -> Option<(f64, &T)> {
        HotColdQueue::peek(self).ok()
    }

    fn pop(&mut self) -> Option<Entry<T>> {
        self.dequeue().ok()
    }

    fn clear(&mut self) {
        HotColdQueue::clear(self);
    }
}

impl<T> Default for HotColdQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Entry<T>> for HotColdQueue<T> {
    fn extend<I: IntoIterator<Item = Entry<T>>>(&mut self, iter: I) {
        for (cost, item) in iter {
            self.enqueue(cost, item);
        }
    }
}

impl<T> FromIterator<Entry<T>> for HotColdQueue<T> {
    fn from_iter<I: IntoIterator<Item = Entry<T>>>(iter: I) -> Self {
        let mut queue = HotColdQueue::new();
        queue.extend(iter);
        queue
    }
}
