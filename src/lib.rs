//! Hot/Cold priority queues for Rust
//!
//! This crate provides a priority queue keyed by an `f64` cost that always
//! hands back the pending entry with the smallest cost. It is built from two
//! cooperating binary min-heaps so that bursts of higher-cost insertions do not
//! disturb the heap currently being drained.
//!
//! # Contents
//!
//! - [`binary::MinHeap`]: array-backed binary min-heap; O(log n) insert and extract-min
//! - [`hot_cold::HotColdQueue`]: two-heap queue with threshold routing and O(1) role swaps
//! - [`pathfinding`]: Dijkstra and A* search generic over either queue
//!
//! # Example
//!
//! ```rust
//! use hotcold_heaps::hot_cold::HotColdQueue;
//!
//! let mut queue = HotColdQueue::new();
//! queue.enqueue(5.0, "a");
//! queue.enqueue(1.0, "b");
//! assert_eq!(queue.peek(), Ok((1.0, &"b")));
//! assert_eq!(queue.dequeue(), Ok((1.0, "b")));
//! assert_eq!(queue.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod binary;
pub mod hot_cold;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use binary::MinHeap;
pub use hot_cold::HotColdQueue;
pub use traits::{CostQueue, Entry, QueueError};
