//! Fixed-arity composite FIFO with a merged global view.
//!
//! [`MultiQueue<T, SIZE>`] holds `SIZE` independent FIFO sub-queues. Every value
//! also takes a place in one global insertion order, so the structure can be
//! drained either per sub-queue or as a single FIFO, and both views stay
//! consistent whichever way values leave.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MultiQueue<T, SIZE>                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  queues[0]  [a, c, f]        deficits[0] = 0                    │
//! │  queues[1]  [e]              deficits[1] = 2   (b, d removed)   │
//! │  queues[2]  [g]              deficits[2] = 0                    │
//! │                                                                 │
//! │  order      [0, 1, 0, 1, 1, 0, 2]                               │
//! │              ▲  ╳     ╳                                         │
//! │              │  stale entries, skipped lazily                   │
//! │              global front lives in queues[0]                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `order` records which sub-queue received each value. Removing a value
//! straight from a sub-queue does not search `order`; it bumps that sub-queue's
//! deficit instead, and the stale entry is dropped when it reaches the front.
//! After every mutation the front of `order` names the sub-queue holding the
//! global front, so [`front`](MultiQueue::front) is a plain lookup.
//!
//! # Contract
//!
//! Indices must lie in `0..SIZE`, and `front*`/`dequeue*` need a value to act
//! on. The plain operations panic when that does not hold; the `try_*` family
//! reports a [`MultiQueueError`] and leaves the structure untouched.

use crate::config::Config;
use crate::error::MultiQueueError;
use crate::invariants::{
    debug_assert_len_accounting, debug_assert_live_front, debug_assert_order_accounting,
};
use crate::iter::Iter;
use crate::metrics::Metrics;

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

/// Reports a contract violation at the caller's location.
#[cold]
#[track_caller]
fn violated(err: MultiQueueError) -> ! {
    panic!("multi-queue precondition violated: {err}")
}

/// `SIZE` independent FIFO sub-queues observable as one global FIFO.
///
/// # Type Parameters
///
/// - `T`: The element type
/// - `SIZE`: The number of sub-queues (must be > 0)
///
/// # Example
///
/// ```
/// use multiqueue::MultiQueue;
///
/// let mut queue: MultiQueue<char, 2> = MultiQueue::new();
/// queue.enqueue(0, 'a');
/// queue.enqueue(1, 'b');
/// queue.enqueue(0, 'c');
///
/// assert_eq!(queue.front(), &'a');
/// assert_eq!(queue.front_of(1), &'b');
///
/// // Taking 'a' out of sub-queue 0 also advances the global view.
/// assert_eq!(queue.dequeue_from(0), 'a');
/// assert_eq!(queue.front(), &'b');
/// ```
#[derive(Clone)]
pub struct MultiQueue<T, const SIZE: usize> {
    /// Per-key FIFO storage
    queues: [VecDeque<T>; SIZE],
    /// Sub-queue index of every value, in global insertion order
    order: VecDeque<usize>,
    /// Entries per sub-queue in `order` that refer to already removed values
    deficits: [usize; SIZE],
    /// Total number of present values
    len: usize,
    config: Config,
    metrics: Metrics,
}

impl<T, const SIZE: usize> MultiQueue<T, SIZE> {
    /// The fixed number of sub-queues.
    pub const QUEUES: usize = SIZE;

    /// Post-monomorphization check that `SIZE` is usable.
    const VALID_SIZE: () = assert!(SIZE > 0, "MultiQueue must have at least 1 sub-queue");

    /// Creates an empty multi-queue with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty multi-queue with custom settings.
    ///
    /// # Example
    ///
    /// ```
    /// use multiqueue::{Config, MultiQueue};
    ///
    /// let queue: MultiQueue<u64, 4> = MultiQueue::with_config(Config::new(256, true));
    /// assert!(queue.is_empty());
    /// assert!(queue.config().enable_metrics);
    /// ```
    pub fn with_config(config: Config) -> Self {
        let () = Self::VALID_SIZE;

        Self {
            queues: std::array::from_fn(|_| VecDeque::with_capacity(config.initial_capacity)),
            order: VecDeque::with_capacity(config.order_capacity(SIZE)),
            deficits: [0; SIZE],
            len: 0,
            config,
            metrics: Metrics::new(),
        }
    }

    // =========================================================================
    // STATUS
    // =========================================================================

    /// Returns the number of sub-queues.
    #[inline]
    pub const fn queue_count(&self) -> usize {
        SIZE
    }

    /// Returns the configuration this multi-queue was built with.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns a snapshot of the operation counters.
    ///
    /// All zero unless [`Config::enable_metrics`] is set.
    #[inline]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Zeroes the operation counters.
    pub fn reset_metrics(&mut self) {
        self.metrics = Metrics::new();
    }

    /// Returns the total number of values across all sub-queues.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of values in sub-queue `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE`.
    #[inline]
    #[track_caller]
    pub fn len_of(&self, index: usize) -> usize {
        match self.check_index(index) {
            Ok(()) => self.queues[index].len(),
            Err(err) => violated(err),
        }
    }

    /// Returns true if no sub-queue holds a value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if sub-queue `index` holds no value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE`.
    #[inline]
    #[track_caller]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.len_of(index) == 0
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    /// Returns the globally oldest value without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the multi-queue is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.try_front() {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Returns the oldest value of sub-queue `index` without removing it.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE` or sub-queue `index` is empty.
    #[inline]
    #[track_caller]
    pub fn front_of(&self, index: usize) -> &T {
        match self.try_front_of(index) {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Checked form of [`front`](Self::front).
    pub fn try_front(&self) -> Result<&T, MultiQueueError> {
        let &k = self.order.front().ok_or(MultiQueueError::Empty)?;
        // INV-FRONT: the order front always names a live sub-queue front.
        self.queues[k]
            .front()
            .ok_or(MultiQueueError::SubQueueEmpty { index: k })
    }

    /// Checked form of [`front_of`](Self::front_of).
    pub fn try_front_of(&self, index: usize) -> Result<&T, MultiQueueError> {
        self.check_index(index)?;
        self.queues[index]
            .front()
            .ok_or(MultiQueueError::SubQueueEmpty { index })
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Appends `value` to sub-queue `index`, making it the newest value both
    /// there and in the global order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE`.
    #[inline]
    #[track_caller]
    pub fn enqueue(&mut self, index: usize, value: T) {
        if let Err((err, _)) = self.try_enqueue(index, value) {
            violated(err);
        }
    }

    /// Checked form of [`enqueue`](Self::enqueue).
    ///
    /// On failure the value is handed back alongside the error.
    pub fn try_enqueue(&mut self, index: usize, value: T) -> Result<(), (MultiQueueError, T)> {
        if let Err(err) = self.check_index(index) {
            return Err((err, value));
        }

        self.queues[index].push_back(value);
        self.order.push_back(index);
        self.len += 1;

        if self.config.enable_metrics {
            self.metrics.enqueued += 1;
        }

        self.check_invariants();
        Ok(())
    }

    /// Removes and returns the globally oldest value.
    ///
    /// # Panics
    ///
    /// Panics if the multi-queue is empty.
    #[inline]
    #[track_caller]
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Removes and returns the oldest value of sub-queue `index`, wherever it
    /// sits in the global order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE` or sub-queue `index` is empty.
    #[inline]
    #[track_caller]
    pub fn dequeue_from(&mut self, index: usize) -> T {
        match self.try_dequeue_from(index) {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Checked form of [`dequeue`](Self::dequeue).
    pub fn try_dequeue(&mut self) -> Result<T, MultiQueueError> {
        let &k = self.order.front().ok_or(MultiQueueError::Empty)?;
        let value = self.queues[k]
            .pop_front()
            .ok_or(MultiQueueError::SubQueueEmpty { index: k })?;

        self.order.pop_front();
        self.len -= 1;

        if self.config.enable_metrics {
            self.metrics.dequeued_global += 1;
        }

        self.purge();
        self.check_invariants();
        Ok(value)
    }

    /// Checked form of [`dequeue_from`](Self::dequeue_from).
    pub fn try_dequeue_from(&mut self, index: usize) -> Result<T, MultiQueueError> {
        self.check_index(index)?;
        let value = self.queues[index]
            .pop_front()
            .ok_or(MultiQueueError::SubQueueEmpty { index })?;

        self.len -= 1;

        if self.order.front() == Some(&index) {
            // The removed value was also the global front.
            self.order.pop_front();
            self.purge();
        } else {
            self.deficits[index] += 1;
        }

        if self.config.enable_metrics {
            self.metrics.dequeued_direct += 1;
        }

        self.check_invariants();
        Ok(value)
    }

    /// Drops every value and resets the order bookkeeping.
    ///
    /// Metrics are kept; see [`reset_metrics`](Self::reset_metrics).
    pub fn clear(&mut self) {
        let dropped = self.len;
        for queue in &mut self.queues {
            queue.clear();
        }
        self.order.clear();
        self.deficits = [0; SIZE];
        self.len = 0;

        debug!(dropped, queues = SIZE, "cleared multi-queue");
        self.check_invariants();
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    /// Iterates over all values in global insertion order, yielding each with
    /// the index of the sub-queue that owns it.
    ///
    /// # Example
    ///
    /// ```
    /// use multiqueue::MultiQueue;
    ///
    /// let queue: MultiQueue<&str, 2> = [(1, "x"), (0, "y"), (1, "z")].into_iter().collect();
    /// let seen: Vec<_> = queue.iter().collect();
    /// assert_eq!(seen, vec![(1, &"x"), (0, &"y"), (1, &"z")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, SIZE> {
        Iter::new(&self.queues, &self.order, self.deficits, self.len)
    }

    /// Iterates over sub-queue `index` from front to back.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SIZE`.
    #[track_caller]
    pub fn iter_of(&self, index: usize) -> vec_deque::Iter<'_, T> {
        match self.check_index(index) {
            Ok(()) => self.queues[index].iter(),
            Err(err) => violated(err),
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), MultiQueueError> {
        if index < SIZE {
            Ok(())
        } else {
            Err(MultiQueueError::IndexOutOfRange {
                index,
                queues: SIZE,
            })
        }
    }

    /// Pops order entries that refer to values already taken out through
    /// `dequeue_from`, until the front names a live value or `order` is empty.
    fn purge(&mut self) {
        let mut skipped = 0u64;

        while let Some(&k) = self.order.front() {
            if self.deficits[k] == 0 {
                break;
            }
            self.deficits[k] -= 1;
            self.order.pop_front();
            skipped += 1;
        }

        if skipped > 0 {
            trace!(
                skipped,
                remaining = self.order.len(),
                "purged stale order entries"
            );
            if self.config.enable_metrics {
                self.metrics.purged += skipped;
            }
        }
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert_len_accounting!(self.len, self.queues);
        debug_assert_order_accounting!(self.order.len(), self.len, self.deficits);
        debug_assert_live_front!(self.order.front().copied(), self.queues, self.deficits);
    }
}

impl<T, const SIZE: usize> Default for MultiQueue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const SIZE: usize> fmt::Debug for MultiQueue<T, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const SIZE: usize> Extend<(usize, T)> for MultiQueue<T, SIZE> {
    /// Enqueues each `(index, value)` pair in iteration order.
    ///
    /// Panics on the first out-of-range index, like [`enqueue`](MultiQueue::enqueue).
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        for (index, value) in iter {
            self.enqueue(index, value);
        }
    }
}

impl<T, const SIZE: usize> FromIterator<(usize, T)> for MultiQueue<T, SIZE> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T, const SIZE: usize> IntoIterator for &'a MultiQueue<T, SIZE> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T, SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PREALLOCATED_CONFIG;

    fn routed(input: &str) -> MultiQueue<char, 2> {
        input
            .chars()
            .map(|c| (usize::from(c != 'c'), c))
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let queue: MultiQueue<u64, 3> = MultiQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.queue_count(), 3);
        assert_eq!(MultiQueue::<u64, 3>::QUEUES, 3);
        for i in 0..3 {
            assert!(queue.is_empty_at(i));
            assert_eq!(queue.len_of(i), 0);
        }
    }

    #[test]
    fn test_enqueue_updates_both_views() {
        let mut queue: MultiQueue<u64, 2> = MultiQueue::new();
        queue.enqueue(1, 10);
        queue.enqueue(0, 20);
        queue.enqueue(1, 30);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.len_of(0), 1);
        assert_eq!(queue.len_of(1), 2);
        assert_eq!(*queue.front(), 10);
        assert_eq!(*queue.front_of(0), 20);
        assert_eq!(*queue.front_of(1), 10);
    }

    #[test]
    fn test_interleaved_global_front() {
        let mut queue: MultiQueue<char, 2> = MultiQueue::new();
        queue.enqueue(0, 'a');
        queue.enqueue(1, 'b');
        queue.enqueue(0, 'c');

        assert_eq!(*queue.front(), 'a');
        assert_eq!(queue.dequeue(), 'a');
        assert_eq!(*queue.front(), 'b');

        assert_eq!(queue.dequeue_from(0), 'c');
        assert!(queue.is_empty_at(0));
        assert_eq!(queue.len(), 1);
        assert_eq!(*queue.front(), 'b');
    }

    #[test]
    fn test_routed_string_scenario() {
        let mut queue = routed("ccccddcdcdccdd");
        assert_eq!(queue.len(), 14);
        assert_eq!(queue.len_of(0), 8);
        assert_eq!(queue.len_of(1), 6);

        let ds: Vec<char> = (0..6).map(|_| queue.dequeue_from(1)).collect();
        assert_eq!(ds, vec!['d'; 6]);
        assert_eq!(queue.len(), 8);
        assert!(queue.is_empty_at(1));

        let mut cs = Vec::new();
        while !queue.is_empty_at(0) {
            cs.push(queue.dequeue_from(0));
        }
        assert_eq!(cs, vec!['c'; 8]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_deficit_skips_stale_entries() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::with_config(PREALLOCATED_CONFIG);
        queue.extend([(0, 1), (1, 2), (1, 3), (0, 4)]);

        // Remove 2 and 3 directly; neither is the global front.
        assert_eq!(queue.dequeue_from(1), 2);
        assert_eq!(queue.dequeue_from(1), 3);
        assert_eq!(queue.deficits, [0, 2]);

        // Taking 1 exposes the two stale entries, which get purged.
        assert_eq!(queue.dequeue(), 1);
        assert_eq!(queue.deficits, [0, 0]);
        assert_eq!(*queue.front(), 4);

        let metrics = queue.metrics();
        assert_eq!(metrics.enqueued, 4);
        assert_eq!(metrics.dequeued_direct, 2);
        assert_eq!(metrics.dequeued_global, 1);
        assert_eq!(metrics.purged, 2);
        assert_eq!(metrics.dequeued(), 3);
    }

    #[test]
    fn test_dequeue_from_front_queue_purges() {
        let mut queue: MultiQueue<u32, 3> = MultiQueue::new();
        queue.extend([(0, 1), (2, 2), (1, 3), (2, 4)]);

        // Stale entry for sub-queue 2 sits behind the front.
        assert_eq!(queue.dequeue_from(2), 2);
        // Removing the front through its own sub-queue must skip it.
        assert_eq!(queue.dequeue_from(0), 1);
        assert_eq!(*queue.front(), 3);
        assert_eq!(queue.order.len(), 2);
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.extend([(0, 1), (1, 2), (0, 3)]);
        queue.dequeue_from(1);
        queue.dequeue_from(0);
        queue.dequeue_from(0);
        assert!(queue.is_empty());
        assert!(queue.order.is_empty());
        assert_eq!(queue.deficits, [0, 0]);

        queue.extend([(1, 7), (0, 8)]);
        assert_eq!(queue.dequeue(), 7);
        assert_eq!(queue.dequeue(), 8);
    }

    #[test]
    fn test_metrics_disabled_by_default() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(0, 1);
        queue.dequeue();
        assert_eq!(queue.metrics(), Metrics::default());
    }

    #[test]
    fn test_reset_metrics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::with_config(Config::new(0, true));
        queue.enqueue(1, 1);
        assert_eq!(queue.metrics().enqueued, 1);
        queue.reset_metrics();
        assert_eq!(queue.metrics(), Metrics::default());
    }

    #[test]
    fn test_clear() {
        let mut queue = routed("cdcd");
        queue.dequeue_from(1);
        queue.clear();

        assert!(queue.is_empty());
        assert!(queue.is_empty_at(0));
        assert!(queue.is_empty_at(1));
        assert!(queue.order.is_empty());
        assert_eq!(queue.deficits, [0, 0]);

        queue.enqueue(1, 'x');
        assert_eq!(*queue.front(), 'x');
    }

    #[test]
    fn test_iter_skips_removed_values() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.extend([(0, 1), (1, 2), (1, 3), (0, 4), (1, 5)]);
        queue.dequeue_from(1);

        let iter = queue.iter();
        assert_eq!(iter.len(), 4);
        let seen: Vec<_> = iter.map(|(i, v)| (i, *v)).collect();
        assert_eq!(seen, vec![(0, 1), (1, 3), (0, 4), (1, 5)]);

        let ones: Vec<u32> = queue.iter_of(1).copied().collect();
        assert_eq!(ones, vec![3, 5]);
    }

    #[test]
    fn test_debug_lists_global_order() {
        let queue: MultiQueue<u32, 2> = [(1, 5), (0, 6)].into_iter().collect();
        assert_eq!(format!("{:?}", queue), "[(1, 5), (0, 6)]");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut queue = routed("cdc");
        let snapshot = queue.clone();
        queue.dequeue();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(*snapshot.front(), 'c');
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_try_api_reports_errors_without_mutation() {
        let out_of_range = |index| MultiQueueError::IndexOutOfRange { index, queues: 2 };

        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        assert_eq!(queue.try_front(), Err(MultiQueueError::Empty));
        assert_eq!(queue.try_dequeue(), Err(MultiQueueError::Empty));
        assert_eq!(
            queue.try_front_of(1),
            Err(MultiQueueError::SubQueueEmpty { index: 1 })
        );

        let rejected = queue.try_enqueue(2, 99);
        assert_eq!(rejected, Err((out_of_range(2), 99)));
        assert!(queue.is_empty());

        queue.enqueue(0, 1);
        assert_eq!(
            queue.try_dequeue_from(1),
            Err(MultiQueueError::SubQueueEmpty { index: 1 })
        );
        assert_eq!(queue.try_dequeue_from(5), Err(out_of_range(5)));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.try_dequeue(), Ok(1));
    }

    #[test]
    #[should_panic(expected = "multi-queue is empty")]
    fn test_front_on_empty_panics() {
        let queue: MultiQueue<u32, 2> = MultiQueue::new();
        let _ = queue.front();
    }

    #[test]
    #[should_panic(expected = "multi-queue is empty")]
    fn test_dequeue_on_empty_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.dequeue();
    }

    #[test]
    #[should_panic(expected = "sub-queue 0 is empty")]
    fn test_front_of_empty_sub_queue_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(1, 1);
        let _ = queue.front_of(0);
    }

    #[test]
    #[should_panic(expected = "sub-queue 1 is empty")]
    fn test_dequeue_from_empty_sub_queue_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(0, 1);
        queue.dequeue_from(1);
    }

    #[test]
    #[should_panic(expected = "index 2 out of range")]
    fn test_enqueue_out_of_range_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(2, 1);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range")]
    fn test_len_of_out_of_range_panics() {
        let queue: MultiQueue<u32, 2> = MultiQueue::new();
        let _ = queue.len_of(3);
    }

    #[test]
    #[should_panic(expected = "index 7 out of range")]
    fn test_front_of_out_of_range_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(0, 1);
        let _ = queue.front_of(7);
    }

    #[test]
    #[should_panic(expected = "index 2 out of range")]
    fn test_dequeue_from_out_of_range_panics() {
        let mut queue: MultiQueue<u32, 2> = MultiQueue::new();
        queue.enqueue(1, 1);
        queue.dequeue_from(2);
    }

    #[test]
    #[should_panic(expected = "index 4 out of range")]
    fn test_is_empty_at_out_of_range_panics() {
        let queue: MultiQueue<u32, 2> = MultiQueue::new();
        let _ = queue.is_empty_at(4);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_oversized_initial_capacity_panics_at_construction() {
        let _queue: MultiQueue<u64, 2> = MultiQueue::with_config(Config::new(usize::MAX, false));
    }

    #[test]
    fn test_drop_remaining_values() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        {
            let mut queue: MultiQueue<Rc<()>, 3> = MultiQueue::new();
            for i in 0..6 {
                queue.enqueue(i % 3, Rc::clone(&tracker));
            }
            drop(queue.dequeue_from(2));
            drop(queue.dequeue());
            assert_eq!(Rc::strong_count(&tracker), 5);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
