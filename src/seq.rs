//! Shared sequence numbering for one logical log stream.
//!
//! The counter is an explicitly constructed resource, passed into each
//! logger that feeds the same stream. It is never a hidden singleton:
//! callers decide whether two loggers share one numbering or not.

use core::sync::atomic::{AtomicU64, Ordering};

/// Monotonic record counter shared by all producers of one stream.
///
/// Every log attempt consumes exactly one number, whether the record is
/// enqueued, truncated, or dropped. Numbers are never reused, so a gap in
/// the drained output is a reliable overflow signal.
///
/// Increments use `Relaxed` ordering. Record visibility is established by
/// the queue's own enqueue/dequeue synchronization, not by this counter;
/// all it must guarantee is that each producer gets a unique number.
///
/// # Usage
///
/// ```
/// use rtlog::SequenceCounter;
///
/// static SEQ: SequenceCounter = SequenceCounter::new();
///
/// assert_eq!(SEQ.advance(), 1);
/// assert_eq!(SEQ.advance(), 2);
/// assert_eq!(SEQ.current(), 2);
/// ```
pub struct SequenceCounter {
    last: AtomicU64,
}

impl SequenceCounter {
    /// Create a counter at the default origin. The first record gets 1.
    pub const fn new() -> Self {
        Self::with_origin(0)
    }

    /// Create a counter at a chosen origin. The first record gets
    /// `origin + 1`.
    pub const fn with_origin(origin: u64) -> Self {
        Self {
            last: AtomicU64::new(origin),
        }
    }

    /// Claim the next sequence number.
    ///
    /// Wait-free: a single atomic increment, no ordering constraint
    /// beyond the increment itself.
    #[inline]
    pub fn advance(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Last number handed out (the origin if none was).
    #[inline]
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}
