//! Realtime-safe producer surface and the matching drain.
//!
//! ```text
//! RT thread(s)            Logger                 drain thread
//! ────────────            ──────                 ────────────
//!
//! rt_log!() ──────────▶ [r0][r1][r2] ──────────▶ sink(payload,
//! bounded format          bounded queue               seq, text)
//! non-blocking            lock-free push          blocking ok
//! ```
//!
//! # Rules
//!
//! - The producer path shall never block, allocate, or touch a lock
//! - A full queue drops the record and reports it, nothing more
//! - Every attempt consumes one sequence number, so drops stay visible
//!   as gaps in the drained output

use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

#[cfg(feature = "mpsc")]
use crate::mpsc::MpscArrayQueue;
use crate::queue::LogQueue;
use crate::record::LogRecord;
use crate::seq::SequenceCounter;
use crate::spsc::SpscRingQueue;
use crate::status::Status;

/// One logical log stream: formats in the caller's thread, assigns
/// sequence numbers, enqueues without blocking.
///
/// `P` is the caller payload carried verbatim next to the text (level,
/// region, timestamp: whatever the sink wants back). `MAX_MESSAGE_BYTES`
/// bounds the formatted text including its terminator. `Q` selects the
/// queue profile; use the [`SpscLogger`]/[`MpscLogger`] aliases unless
/// plugging in a custom queue.
///
/// The logger owns its queue exclusively and adds no synchronization of
/// its own: with a queue that is not [`MultiProducer`](crate::MultiProducer),
/// concurrent [`try_log`](Self::try_log) calls are outside the contract.
/// [`drain`](Self::drain) is single-consumer regardless of profile.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rtlog::{rt_log, SequenceCounter, SpscLogger};
///
/// let seq = Arc::new(SequenceCounter::new());
/// let logger: SpscLogger<u8, 64> = SpscLogger::new(16, seq);
///
/// let status = rt_log!(logger, 3, "gain changed to {}", 0.5);
/// assert!(status.is_success());
///
/// let drained = logger.drain(|payload, seq, text| {
///     assert_eq!(*payload, 3);
///     assert_eq!(seq, 1);
///     assert_eq!(text, "gain changed to 0.5");
/// });
/// assert_eq!(drained, 1);
/// ```
pub struct Logger<P, const MAX_MESSAGE_BYTES: usize, Q>
where
    Q: LogQueue<Item = LogRecord<P, MAX_MESSAGE_BYTES>>,
{
    queue: Q,
    sequence: Arc<SequenceCounter>,
    _payload: PhantomData<fn(P) -> P>,
}

/// [`Logger`] over the single-producer ring profile.
pub type SpscLogger<P, const MAX_MESSAGE_BYTES: usize> =
    Logger<P, MAX_MESSAGE_BYTES, SpscRingQueue<LogRecord<P, MAX_MESSAGE_BYTES>>>;

/// [`Logger`] over the multi-producer queue profile.
#[cfg(feature = "mpsc")]
pub type MpscLogger<P, const MAX_MESSAGE_BYTES: usize> =
    Logger<P, MAX_MESSAGE_BYTES, MpscArrayQueue<LogRecord<P, MAX_MESSAGE_BYTES>>>;

impl<P, const MAX_MESSAGE_BYTES: usize, Q> Logger<P, MAX_MESSAGE_BYTES, Q>
where
    Q: LogQueue<Item = LogRecord<P, MAX_MESSAGE_BYTES>>,
{
    /// Create a logger holding at most `max_records` queued records,
    /// numbering them from the shared counter.
    ///
    /// All allocation happens here; the producer path performs none.
    pub fn new(max_records: usize, sequence: Arc<SequenceCounter>) -> Self {
        Self::with_queue(Q::with_capacity(max_records), sequence)
    }

    /// Create a logger over an already-constructed queue.
    pub fn with_queue(queue: Q, sequence: Arc<SequenceCounter>) -> Self {
        Self {
            queue,
            sequence,
            _payload: PhantomData,
        }
    }

    /// Record one message. Realtime-safe.
    ///
    /// Claims the next sequence number, renders `args` into the record's
    /// fixed buffer (at most `MAX_MESSAGE_BYTES - 1` bytes, always
    /// NUL-terminated), then attempts the enqueue. A truncated record is
    /// still pushed: a shortened message beats a lost one.
    ///
    /// The sequence number is consumed even when the record is dropped,
    /// so sustained overflow shows up as gaps in the drained stream.
    ///
    /// This is also the composition point for caller-level wrappers: pass
    /// a ready-made [`fmt::Arguments`], or use [`rt_log!`](crate::rt_log)
    /// to build one in place.
    ///
    /// # Timing
    ///
    /// Bounded by the rendered length plus one queue push. Never blocks,
    /// never allocates, never panics on overflow of queue or buffer.
    #[inline]
    pub fn try_log(&self, payload: P, args: fmt::Arguments<'_>) -> Status {
        let sequence_number = self.sequence.advance();

        let mut record = LogRecord::new(payload, sequence_number);
        let truncated = record.render_message(args);

        // Enqueue is checked last: QueueFull wins when both occur
        match self.queue.try_push(record) {
            Err(_) => Status::QueueFull,
            Ok(()) if truncated => Status::MessageTruncated,
            Ok(()) => Status::Success,
        }
    }

    /// Consume all currently queued records, oldest first.
    ///
    /// Calls `sink(payload, sequence_number, text)` once per record and
    /// returns the processed count. Stops at the first empty pop; does
    /// not wait for new arrivals. Single consumer only.
    ///
    /// Realtime-safe only if `sink` is.
    pub fn drain<F>(&self, mut sink: F) -> usize
    where
        F: FnMut(&P, u64, &str),
    {
        let mut processed = 0;
        while let Some(record) = self.queue.try_pop() {
            sink(
                record.payload(),
                record.sequence_number(),
                record.message_str(),
            );
            processed += 1;
        }
        processed
    }

    /// Maximum number of queued records.
    #[inline]
    pub fn queue_capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// The counter this logger numbers its records from.
    #[inline]
    pub fn sequence(&self) -> &SequenceCounter {
        &self.sequence
    }
}

/// Record one message on a [`Logger`], formatting in place.
///
/// Expands to [`Logger::try_log`] with a `format_args!`-built argument
/// list, so format/argument mismatches are compile errors.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rtlog::{rt_log, SequenceCounter, SpscLogger};
///
/// let logger: SpscLogger<(), 64> =
///     SpscLogger::new(8, Arc::new(SequenceCounter::new()));
/// let status = rt_log!(logger, (), "tick {}", 7);
/// assert!(status.is_success());
/// ```
#[macro_export]
macro_rules! rt_log {
    ($logger:expr, $payload:expr, $($arg:tt)*) => {
        $logger.try_log($payload, ::core::format_args!($($arg)*))
    };
}
