//! The value type handed from producers to the consumer.

use core::fmt;

use crate::format::format_into;

/// One queued log record.
///
/// Built on the producer's stack, moved into queue storage, dropped once
/// the drain side has passed it to the sink. The message buffer is fixed
/// at `MAX_MESSAGE_BYTES` and is always NUL-terminated within capacity:
/// either the full rendered text fits in `MAX_MESSAGE_BYTES - 1` bytes,
/// or the buffer holds the longest prefix that does, plus terminator.
#[derive(Clone, Copy)]
pub struct LogRecord<P, const MAX_MESSAGE_BYTES: usize> {
    payload: P,
    sequence_number: u64,
    message: [u8; MAX_MESSAGE_BYTES],
}

impl<P, const MAX_MESSAGE_BYTES: usize> LogRecord<P, MAX_MESSAGE_BYTES> {
    // Compile-time check: the terminator must always fit
    const CAPACITY_OK: () = assert!(
        MAX_MESSAGE_BYTES > 0,
        "message capacity must hold at least the terminator"
    );

    /// Create a record with an empty message.
    pub fn new(payload: P, sequence_number: u64) -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            payload,
            sequence_number,
            message: [0; MAX_MESSAGE_BYTES],
        }
    }

    /// Render `args` into the message buffer.
    ///
    /// Writes at most `MAX_MESSAGE_BYTES - 1` bytes and NUL-terminates.
    /// Returns true if the intended text was longer than that.
    pub(crate) fn render_message(&mut self, args: fmt::Arguments<'_>) -> bool {
        let (len, truncated) = format_into(&mut self.message[..MAX_MESSAGE_BYTES - 1], args);
        self.message[len] = 0;
        truncated
    }

    /// Caller payload carried alongside the text.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Position of this record in its stream's numbering.
    #[inline]
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Message bytes up to (not including) the terminator.
    #[inline]
    pub fn message_bytes(&self) -> &[u8] {
        let len = self
            .message
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_MESSAGE_BYTES - 1);
        &self.message[..len]
    }

    /// Message text.
    ///
    /// The bounded formatter only writes whole characters, so this does
    /// not fail for records it produced.
    #[inline]
    pub fn message_str(&self) -> &str {
        core::str::from_utf8(self.message_bytes()).unwrap_or("<invalid utf8>")
    }
}

impl<P: Default, const MAX_MESSAGE_BYTES: usize> Default for LogRecord<P, MAX_MESSAGE_BYTES> {
    fn default() -> Self {
        Self::new(P::default(), 0)
    }
}

impl<P: fmt::Debug, const MAX_MESSAGE_BYTES: usize> fmt::Debug
    for LogRecord<P, MAX_MESSAGE_BYTES>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("payload", &self.payload)
            .field("sequence_number", &self.sequence_number)
            .field("message", &self.message_str())
            .finish()
    }
}
