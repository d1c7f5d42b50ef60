//! The raw line source seam
//!
//! Abstracts the "read one line of raw bytes, or signal exhaustion"
//! primitive so the reader can be driven by stdin, files, or in-memory
//! buffers alike. Every [`std::io::BufRead`] is a [`LineSource`].

use std::io::BufRead;

/// Outcome of a single raw-line read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawRead {
    /// The source is exhausted: nothing pending and no terminator.
    /// Distinguished from an empty line, which is `Bytes(0)` or a lone LF.
    Exhausted,
    /// This many bytes were appended to the caller's buffer. Zero is
    /// legal only when a terminator was consumed with no payload.
    Bytes(usize),
}

/// A blocking source of raw line bytes.
///
/// One capability: fill the caller's buffer up to and including the next
/// LF (0x0A), or to exhaustion if the source ends without one. The
/// reported count must equal the number of bytes actually appended; a
/// source that lies about it has broken its contract and the reader
/// panics rather than guessing.
pub trait LineSource {
    /// Append one raw line to `buf`, blocking until a full line or
    /// end-of-stream is available.
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> RawRead;
}

impl<R: BufRead> LineSource for R {
    /// `read_until` delivers bytes through the next LF, or whatever
    /// remains when the source ends without one. A read error is
    /// reported as exhaustion: the primitive this seam models returns
    /// the same sentinel for both, and this path carries no error type.
    fn read_raw_line(&mut self, buf: &mut Vec<u8>) -> RawRead {
        match self.read_until(b'\n', buf) {
            Ok(0) | Err(_) => RawRead::Exhausted,
            Ok(n) => RawRead::Bytes(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_buf_read_source_reads_through_lf() {
        let mut src = Cursor::new(&b"one\ntwo"[..]);
        let mut buf = Vec::new();
        assert_eq!(src.read_raw_line(&mut buf), RawRead::Bytes(4));
        assert_eq!(buf, b"one\n");
    }

    #[test]
    fn test_buf_read_source_final_fragment_without_lf() {
        let mut src = Cursor::new(&b"tail"[..]);
        let mut buf = Vec::new();
        assert_eq!(src.read_raw_line(&mut buf), RawRead::Bytes(4));
        assert_eq!(buf, b"tail");
        buf.clear();
        assert_eq!(src.read_raw_line(&mut buf), RawRead::Exhausted);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_buf_read_source_empty_is_exhausted() {
        let mut src = Cursor::new(&b""[..]);
        let mut buf = Vec::new();
        assert_eq!(src.read_raw_line(&mut buf), RawRead::Exhausted);
    }
}
