//! Debug assertion macros for multi-queue invariants.
//!
//! Active only in debug builds (`#[cfg(debug_assertions)]` via `debug_assert!`),
//! so release builds pay nothing. Each check is O(SIZE) at worst.

// =============================================================================
// INV-LEN: Length Accounting
// =============================================================================

/// Assert that the cached total equals the sum of sub-queue lengths.
///
/// **Invariant**: `len == Σ queues[i].len()`
///
/// Used in: `check_invariants()` after every mutation
macro_rules! debug_assert_len_accounting {
    ($len:expr, $queues:expr) => {
        debug_assert!(
            {
                let sum: usize = $queues.iter().map(|q| q.len()).sum();
                sum == $len
            },
            "INV-LEN violated: cached length {} != sum of sub-queue lengths {}",
            $len,
            $queues.iter().map(|q| q.len()).sum::<usize>()
        )
    };
}

// =============================================================================
// INV-ORD: Order Index Accounting
// =============================================================================

/// Assert that every order entry is either live or covered by a deficit.
///
/// **Invariant**: `order.len() == len + Σ deficits[i]`
///
/// Used in: `check_invariants()` after every mutation
macro_rules! debug_assert_order_accounting {
    ($order_len:expr, $len:expr, $deficits:expr) => {
        debug_assert!(
            $order_len == $len + $deficits.iter().sum::<usize>(),
            "INV-ORD violated: {} order entries for {} live values and {} stale",
            $order_len,
            $len,
            $deficits.iter().sum::<usize>()
        )
    };
}

// =============================================================================
// INV-FRONT: Live Global Front
// =============================================================================

/// Assert that the order front, if any, names a sub-queue whose front is the
/// global front (non-empty, nothing left to purge).
///
/// **Invariant**: `order.front() == Some(k) ⟹ deficits[k] == 0 ∧ !queues[k].is_empty()`
///
/// Used in: `check_invariants()` after every mutation
macro_rules! debug_assert_live_front {
    ($front:expr, $queues:expr, $deficits:expr) => {
        if let Some(k) = $front {
            debug_assert!(
                $deficits[k] == 0 && !$queues[k].is_empty(),
                "INV-FRONT violated: order front names sub-queue {} (deficit {}, len {})",
                k,
                $deficits[k],
                $queues[k].len()
            );
        }
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_len_accounting;
pub(crate) use debug_assert_live_front;
pub(crate) use debug_assert_order_accounting;
