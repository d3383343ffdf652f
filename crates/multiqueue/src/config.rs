/// Configuration for [`MultiQueue`](crate::MultiQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Slots reserved up front in each sub-queue (default: 0, grow on demand).
    ///
    /// Passed straight to `VecDeque::with_capacity` at construction, so an
    /// oversized value panics with "capacity overflow" or aborts the process
    /// when the allocation fails, exactly as the std collection does.
    pub initial_capacity: usize,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(initial_capacity: usize, enable_metrics: bool) -> Self {
        Self {
            initial_capacity,
            enable_metrics,
        }
    }

    /// Sets the per-sub-queue initial capacity.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Turns metrics collection on or off.
    pub const fn with_metrics(mut self, enable_metrics: bool) -> Self {
        self.enable_metrics = enable_metrics;
        self
    }

    /// Returns the capacity reserved for the global order index when the
    /// structure has `queues` sub-queues.
    ///
    /// The product is clamped to `usize::MAX` instead of wrapping; that only
    /// keeps the request from shrinking, the allocation itself still fails
    /// for sizes that large.
    #[inline]
    pub const fn order_capacity(&self, queues: usize) -> usize {
        self.initial_capacity.saturating_mul(queues)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            enable_metrics: false,
        }
    }
}

/// Small footprint configuration (no preallocation, no metrics)
pub const SMALL_CONFIG: Config = Config::new(0, false);

/// Preallocated configuration (1K slots per sub-queue, metrics on)
pub const PREALLOCATED_CONFIG: Config = Config::new(1024, true);
