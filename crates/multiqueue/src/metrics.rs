/// Optional counters for monitoring queue activity.
///
/// Only maintained when [`Config::enable_metrics`](crate::Config) is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Values appended via `enqueue`.
    pub enqueued: u64,
    /// Values removed from the global front via `dequeue`.
    pub dequeued_global: u64,
    /// Values removed from a sub-queue front via `dequeue_from`.
    pub dequeued_direct: u64,
    /// Stale order entries skipped by the lazy purge.
    pub purged: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total values removed by either form of dequeue.
    #[inline]
    pub fn dequeued(&self) -> u64 {
        self.dequeued_global + self.dequeued_direct
    }
}
