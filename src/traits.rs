//! Common traits and error types for the cost-keyed queues
//!
//! Both [`MinHeap`](crate::binary::MinHeap) and
//! [`HotColdQueue`](crate::hot_cold::HotColdQueue) order entries by an `f64`
//! cost, smallest first. They expose `Result`-returning inherent methods that
//! surface [`QueueError::EmptyQueueAccess`], and implement [`CostQueue`] so
//! generic code (such as [`pathfinding`](crate::pathfinding)) can use either.

use thiserror::Error;

/// A `(cost, value)` pair as stored in and returned from the queues.
pub type Entry<T> = (f64, T);

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The minimum of an empty queue was requested
    #[error("cannot access the minimum of an empty queue")]
    EmptyQueueAccess,
}

/// Base trait for priority queues keyed by a floating-point cost
///
/// This mirrors the shape of `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// `peek` takes `&mut self` because a [`HotColdQueue`](crate::hot_cold::HotColdQueue)
/// may swap its internal heaps before it can report the minimum. The set of
/// stored entries is never changed by `peek`.
///
/// # Example
///
/// ```rust
/// use hotcold_heaps::CostQueue;
/// use hotcold_heaps::hot_cold::HotColdQueue;
///
/// fn smallest<Q: CostQueue<&'static str>>(mut queue: Q) -> Option<(f64, &'static str)> {
///     queue.push(3.0, "three");
///     queue.push(1.0, "one");
///     queue.push(2.0, "two");
///     assert_eq!(queue.peek(), Some((1.0, &"one")));
///     queue.pop()
/// }
///
/// assert_eq!(smallest(HotColdQueue::new()), Some((1.0, "one")));
/// ```
pub trait CostQueue<T> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element with the given cost
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, cost: f64, item: T);

    /// Returns the minimum cost and associated item without removing it
    fn peek(&mut self) -> Option<(f64, &T)>;

    /// Removes and returns the minimum cost and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<Entry<T>>;

    /// Removes every element
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueueError::EmptyQueueAccess.to_string(),
            "cannot access the minimum of an empty queue"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&QueueError::EmptyQueueAccess);
    }
}
