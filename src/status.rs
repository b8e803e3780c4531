//! Result codes for a single log attempt.
//!
//! Overflow and truncation are ordinary outcomes of a bounded pipeline,
//! not faults. They are returned by value so the caller can count them
//! or ignore them without any branch on the hot path.

/// Outcome of one [`try_log`](crate::Logger::try_log) call.
///
/// Both failure conditions can occur on the same call. The enqueue
/// result is checked last, so [`Status::QueueFull`] takes precedence
/// over [`Status::MessageTruncated`] in the returned code.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    /// Record enqueued with its full message text.
    Success = 0,

    /// Queue was at capacity: the record was dropped.
    /// Its sequence number is still consumed, leaving a visible gap.
    QueueFull = 1,

    /// Rendered text exceeded the message buffer: the record was
    /// delivered with the longest prefix that fits plus terminator.
    MessageTruncated = 2,
}

impl Status {
    /// Convert to string for output.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::QueueFull => "queue full, record dropped",
            Status::MessageTruncated => "message truncated",
        }
    }

    /// True if the record was delivered with its full text.
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// True if the record was dropped at enqueue.
    #[inline]
    pub fn is_dropped(self) -> bool {
        self == Status::QueueFull
    }

    /// True if the record was delivered but shortened.
    #[inline]
    pub fn is_truncated(self) -> bool {
        self == Status::MessageTruncated
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
