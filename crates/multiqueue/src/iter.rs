//! Borrowing iterator over a [`MultiQueue`](crate::MultiQueue) in global order.

use std::collections::{vec_deque, VecDeque};
use std::iter::FusedIterator;

/// Iterator over `(sub-queue index, &value)` in global insertion order.
///
/// Created by [`MultiQueue::iter`](crate::MultiQueue::iter). Walks the order
/// index with a private copy of the deficits, so stale entries are skipped
/// without touching the queue itself.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, const SIZE: usize> {
    queues: &'a [VecDeque<T>; SIZE],
    order: vec_deque::Iter<'a, usize>,
    /// Stale entries still to skip per sub-queue
    skip: [usize; SIZE],
    /// Next position to yield per sub-queue
    cursors: [usize; SIZE],
    remaining: usize,
}

impl<'a, T, const SIZE: usize> Iter<'a, T, SIZE> {
    pub(crate) fn new(
        queues: &'a [VecDeque<T>; SIZE],
        order: &'a VecDeque<usize>,
        deficits: [usize; SIZE],
        len: usize,
    ) -> Self {
        Self {
            queues,
            order: order.iter(),
            skip: deficits,
            cursors: [0; SIZE],
            remaining: len,
        }
    }
}

impl<'a, T, const SIZE: usize> Iterator for Iter<'a, T, SIZE> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for &k in self.order.by_ref() {
            if self.skip[k] > 0 {
                self.skip[k] -= 1;
                continue;
            }

            let value = self.queues[k].get(self.cursors[k])?;
            self.cursors[k] += 1;
            self.remaining -= 1;
            return Some((k, value));
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const SIZE: usize> ExactSizeIterator for Iter<'_, T, SIZE> {}

impl<T, const SIZE: usize> FusedIterator for Iter<'_, T, SIZE> {}
