//! Bounded formatting into a caller-provided byte buffer.
//!
//! The realtime path renders text with `format_args!` machinery only:
//! no heap, no growth, no panic on overflow. Text that does not fit is
//! cut at a UTF-8 character boundary and reported, never an error.

use core::fmt::{self, Write};

/// `fmt::Write` adapter over a fixed byte slice.
///
/// Writes at most `buf.len()` bytes. Once full, further output is
/// discarded and the truncation flag is set; formatting always runs to
/// completion so the buffer ends up holding a deterministic prefix of
/// the intended text.
struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let remaining = self.buf.len() - self.pos;

        let to_write = if bytes.len() <= remaining {
            bytes.len()
        } else {
            self.truncated = true;
            // Cut at a char boundary so the prefix stays valid UTF-8
            let mut cut = remaining;
            while cut > 0 && !s.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };

        self.buf[self.pos..self.pos + to_write].copy_from_slice(&bytes[..to_write]);
        self.pos += to_write;
        Ok(())
    }
}

/// Render `args` into `buf`, bounded by `buf.len()`.
///
/// Returns the number of bytes written and whether the intended text was
/// longer than the buffer.
///
/// # Timing
///
/// Proportional to the rendered length only. Never blocks, never
/// allocates.
#[inline]
pub fn format_into(buf: &mut [u8], args: fmt::Arguments<'_>) -> (usize, bool) {
    let mut writer = BoundedWriter {
        buf,
        pos: 0,
        truncated: false,
    };
    // BoundedWriter::write_str never errors, so neither does this
    let _ = fmt::write(&mut writer, args);
    (writer.pos, writer.truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fits() {
        let mut buf = [0u8; 32];
        let (len, truncated) = format_into(&mut buf, format_args!("Hello {}", 42));
        assert_eq!(&buf[..len], b"Hello 42");
        assert!(!truncated);
    }

    #[test]
    fn test_format_exact_fit_is_not_truncated() {
        let mut buf = [0u8; 8];
        let (len, truncated) = format_into(&mut buf, format_args!("12345678"));
        assert_eq!(len, 8);
        assert!(!truncated);
    }

    #[test]
    fn test_format_one_over_truncates() {
        let mut buf = [0u8; 8];
        let (len, truncated) = format_into(&mut buf, format_args!("123456789"));
        assert_eq!(&buf[..len], b"12345678");
        assert!(truncated);
    }

    #[test]
    fn test_format_truncates_at_char_boundary() {
        // "héllo": 'é' is two bytes, starting at offset 1
        let mut buf = [0u8; 2];
        let (len, truncated) = format_into(&mut buf, format_args!("héllo"));
        assert_eq!(&buf[..len], b"h");
        assert!(truncated);
        assert!(core::str::from_utf8(&buf[..len]).is_ok());
    }

    #[test]
    fn test_format_multiple_fragments() {
        let mut buf = [0u8; 8];
        let (len, truncated) = format_into(&mut buf, format_args!("{}-{}-{}", "ab", "cd", "ef"));
        assert_eq!(&buf[..len], b"ab-cd-ef");
        assert!(!truncated);

        let mut buf = [0u8; 5];
        let (len, truncated) = format_into(&mut buf, format_args!("{}-{}-{}", "ab", "cd", "ef"));
        assert_eq!(&buf[..len], b"ab-cd");
        assert!(truncated);
    }

    #[test]
    fn test_format_empty_buffer() {
        let mut buf = [0u8; 0];
        let (len, truncated) = format_into(&mut buf, format_args!("x"));
        assert_eq!(len, 0);
        assert!(truncated);
    }
}
