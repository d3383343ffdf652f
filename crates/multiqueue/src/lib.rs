//! multiqueue - Fixed-Arity Composite FIFO
//!
//! A [`MultiQueue<T, SIZE>`] holds `SIZE` independent FIFO sub-queues that can
//! also be observed and drained as one FIFO ordered by global insertion time.
//!
//! # Key Features
//!
//! - Compile-time sub-queue count (const generic `SIZE`)
//! - O(1) `front`, `front_of`, `enqueue` and `dequeue_from`
//! - Amortized O(1) global `dequeue` via lazy deletion of stale order entries
//! - Panicking contract API plus a checked `try_*` API with typed errors
//! - Optional operation counters ([`Metrics`])
//!
//! # Example
//!
//! ```
//! use multiqueue::MultiQueue;
//!
//! let mut queue: MultiQueue<char, 2> = MultiQueue::new();
//! for c in "ccdcd".chars() {
//!     queue.enqueue(if c == 'c' { 0 } else { 1 }, c);
//! }
//!
//! assert_eq!(queue.len(), 5);
//! assert_eq!(queue.len_of(1), 2);
//!
//! // Drain sub-queue 1 directly, then whatever is left in global order.
//! while !queue.is_empty_at(1) {
//!     assert_eq!(queue.dequeue_from(1), 'd');
//! }
//! while !queue.is_empty() {
//!     assert_eq!(queue.dequeue(), 'c');
//! }
//! ```

mod config;
mod error;
mod invariants;
mod iter;
mod metrics;
mod multi_queue;

pub use config::{Config, PREALLOCATED_CONFIG, SMALL_CONFIG};
pub use error::MultiQueueError;
pub use iter::Iter;
pub use metrics::Metrics;
pub use multi_queue::MultiQueue;
