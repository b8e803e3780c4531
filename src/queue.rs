//! The queue capability the pipeline is built on.
//!
//! The logger does not care how the hand-off buffer is implemented, only
//! that it keeps the producer side wait-free. Any bounded FIFO satisfying
//! the contract below can back a [`Logger`](crate::Logger); the two
//! shipped profiles are [`SpscRingQueue`](crate::SpscRingQueue) and
//! [`MpscArrayQueue`](crate::MpscArrayQueue).

/// Bounded, non-blocking FIFO between log producers and one consumer.
///
/// # Contract
///
/// - Capacity is fixed at construction. After construction, `try_push`
///   and `try_pop` must not heap-allocate, block on a full/empty queue,
///   or hold an OS lock across a point where the caller can be preempted.
/// - `try_pop` is single-consumer: at most one thread (or one call site
///   at a time) may drain the queue.
/// - The producer profile is declared, not auto-detected. Unless the
///   implementation also implements [`MultiProducer`], calling `try_push`
///   from two threads concurrently is outside its contract.
pub trait LogQueue {
    /// Element type moved through the queue.
    type Item;

    /// Create a queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Attempt to enqueue, never blocking.
    ///
    /// On a full queue the item is handed back unchanged.
    fn try_push(&self, item: Self::Item) -> Result<(), Self::Item>;

    /// Attempt to dequeue the oldest element, never blocking.
    ///
    /// Single consumer only.
    fn try_pop(&self) -> Option<Self::Item>;

    /// Maximum number of queued elements.
    fn capacity(&self) -> usize;
}

/// Marker for queues whose `try_push` tolerates concurrent producers.
///
/// Selecting the multi-producer profile is an explicit configuration
/// choice: a [`LogQueue`] without this marker gets no extra
/// synchronization from the logger, so concurrent
/// [`try_log`](crate::Logger::try_log) calls through it are undefined.
pub trait MultiProducer: LogQueue {}
