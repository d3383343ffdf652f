//! Error types for the checked `try_*` operations.

use thiserror::Error;

/// Precondition failures reported by the checked API of
/// [`MultiQueue`](crate::MultiQueue).
///
/// The unchecked operations panic on the same conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MultiQueueError {
    /// A sub-queue index outside `0..queues`.
    #[error("sub-queue index {index} out of range (queues: {queues})")]
    IndexOutOfRange {
        /// The index that was passed.
        index: usize,
        /// The fixed number of sub-queues.
        queues: usize,
    },

    /// The whole structure holds no values.
    #[error("multi-queue is empty")]
    Empty,

    /// The addressed sub-queue holds no values.
    #[error("sub-queue {index} is empty")]
    SubQueueEmpty {
        /// The empty sub-queue.
        index: usize,
    },
}

impl MultiQueueError {
    /// Returns `true` if the error stems from a bad index rather than from
    /// the current contents.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
