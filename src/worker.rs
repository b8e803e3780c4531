//! Background drain thread.
//!
//! Callers that don't want to poll [`Logger::drain`] themselves hand the
//! logger to a [`DrainWorker`]: one OS thread that drains on a fixed
//! interval and performs a final flush on shutdown. The producer side is
//! unaffected; everything here runs on the non-realtime side.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::logger::Logger;
use crate::queue::LogQueue;
use crate::record::LogRecord;

/// Owns the thread that periodically drains a [`Logger`].
///
/// Lifecycle: spawning starts the thread immediately; [`stop`](Self::stop)
/// asks it to finish (idempotent, callable from any thread); the thread
/// then runs one final drain to catch records enqueued since the last
/// poll; [`join`](Self::join) or `Drop` waits for completion. Dropping
/// without an explicit stop is safe: `Drop` performs stop-then-join on
/// every exit path.
///
/// Polling is unconditional: the worker sleeps the configured interval
/// after every drain, whether or not records were processed.
///
/// The sink must not panic. A panicking sink ends the worker thread on
/// the spot, and the final flush never runs.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use rtlog::{rt_log, DrainWorker, SequenceCounter, SpscLogger};
///
/// let logger: Arc<SpscLogger<(), 64>> =
///     Arc::new(SpscLogger::new(32, Arc::new(SequenceCounter::new())));
///
/// let worker = DrainWorker::spawn(
///     Arc::clone(&logger),
///     |_, seq, text| println!("{{{seq}}} {text}"),
///     Duration::from_millis(10),
/// );
///
/// let _ = rt_log!(logger, (), "worker will pick this up");
/// worker.join();
/// ```
pub struct DrainWorker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl DrainWorker {
    /// Start the drain thread.
    ///
    /// The worker shares ownership of the logger, so the queue outlives
    /// the thread no matter which side shuts down first. `sink` moves
    /// into the thread and is invoked once per drained record with
    /// `(payload, sequence_number, text)`.
    pub fn spawn<P, const MAX_MESSAGE_BYTES: usize, Q, F>(
        logger: Arc<Logger<P, MAX_MESSAGE_BYTES, Q>>,
        mut sink: F,
        poll_interval: Duration,
    ) -> Self
    where
        P: 'static,
        Q: LogQueue<Item = LogRecord<P, MAX_MESSAGE_BYTES>> + Send + Sync + 'static,
        F: FnMut(&P, u64, &str) + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            log::debug!("drain worker started, polling every {:?}", poll_interval);

            while flag.load(Ordering::Acquire) {
                logger.drain(&mut sink);
                thread::sleep(poll_interval);
            }

            // Catch records enqueued since the last poll
            let flushed = logger.drain(&mut sink);
            log::debug!("drain worker stopped, final flush processed {flushed} records");
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Ask the worker to finish. Idempotent, callable from any thread.
    ///
    /// Cooperative: an in-progress drain completes, future poll
    /// iterations are skipped, and the final flush still runs.
    #[inline]
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Stop and wait for the worker thread to complete.
    pub fn join(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for DrainWorker {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
