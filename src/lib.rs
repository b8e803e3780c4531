//! # rtlog
//!
//! Realtime-safe logging pipeline with wait-free producers.
//!
//! ## Architecture
//!
//! ```text
//! RT thread(s)            bounded queue          drain thread
//! ────────────            ─────────────          ────────────
//!
//! rt_log!() ──────────▶ [r0][r1][r2] ─────────▶ sink / file / net
//! format + sequence       lock-free              blocking ok
//! non-blocking push       fixed capacity         polls + final flush
//! ```
//!
//! Producers under hard timing constraints call [`Logger::try_log`] (or
//! the [`rt_log!`] macro): the message is formatted into a fixed buffer
//! in the caller's thread, stamped with a monotonic sequence number, and
//! pushed without blocking. An ordinary thread (yours via
//! [`Logger::drain`], or a [`DrainWorker`]) consumes the records later
//! and hands each to a sink.
//!
//! ## Rules
//!
//! - The producer path never blocks, never allocates, never panics on
//!   overflow of queue or buffer
//! - A full queue drops the record; the drop is observable as a gap in
//!   the sequence numbers and as [`Status::QueueFull`]
//! - Overlong text is delivered truncated, reported as
//!   [`Status::MessageTruncated`]
//! - One consumer per logger; the producer count is a declared profile
//!   ([`SpscLogger`] vs [`MpscLogger`]), never auto-detected

#![warn(missing_docs)]

pub mod format;
pub mod logger;
#[cfg(feature = "mpsc")]
pub mod mpsc;
pub mod queue;
pub mod record;
pub mod seq;
pub mod spsc;
pub mod status;
pub mod worker;

#[cfg(feature = "mpsc")]
pub use logger::MpscLogger;
pub use logger::{Logger, SpscLogger};
#[cfg(feature = "mpsc")]
pub use mpsc::MpscArrayQueue;
pub use queue::{LogQueue, MultiProducer};
pub use record::LogRecord;
pub use seq::SequenceCounter;
pub use spsc::SpscRingQueue;
pub use status::Status;
pub use worker::DrainWorker;
