//! The line reader: strip, repair, deliver
//!
//! `read_line` reads through the end of the current line or until EOF.
//! Input is interpreted as UTF-8; invalid bytes are replaced by the
//! Unicode replacement character (U+FFFD) rather than failing the call.

use crate::error::Error;
use crate::source::{LineSource, RawRead};
use std::io::{self, StdinLock};

/// Read one line from standard input (blocking).
///
/// Returns `None` only when stdin is exhausted with nothing pending —
/// an empty line comes back as `Some` with empty text. With
/// `strip_newline` set, a trailing LF or CRLF is removed; any other
/// trailing bytes are left untouched. Only LF and CRLF are recognized
/// as terminators (see the crate-level known limitation).
///
/// Stdin is locked for the duration of the call. Concurrent callers
/// interleave in undefined order and must serialize externally.
pub fn read_line(strip_newline: bool) -> Option<String> {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    read_line_from(&mut lock, strip_newline)
}

/// Read one line from any [`LineSource`], same contract as [`read_line`].
///
/// The transient byte buffer is scoped to this call and dropped on every
/// exit path.
pub fn read_line_from<S: LineSource + ?Sized>(
    source: &mut S,
    strip_newline: bool,
) -> Option<String> {
    let mut buf = Vec::new();
    let n = match source.read_raw_line(&mut buf) {
        RawRead::Exhausted => return None,
        RawRead::Bytes(n) => n,
    };
    // A source that reports a count it did not deliver has broken the
    // LineSource contract. That is a bug in the source, not an input
    // condition, so fail hard.
    assert!(
        n == buf.len(),
        "LineSource reported {} bytes but delivered {}",
        n,
        buf.len()
    );
    if n == 0 {
        return Some(String::new());
    }
    let line = if strip_newline {
        strip_terminator(&buf)
    } else {
        &buf[..]
    };
    Some(String::from_utf8_lossy(line).into_owned())
}

/// Read all of standard input to exhaustion (blocking until EOF).
///
/// Decoded with the same repair semantics as [`read_line`]. Unlike the
/// line reader, this path has no absence value to fold a read failure
/// into, so I/O errors surface as [`Error::Stdin`].
pub fn read_all() -> Result<String, Error> {
    let mut buf = Vec::new();
    io::Read::read_to_end(&mut io::stdin().lock(), &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Iterator over stripped lines of a [`LineSource`], ending at EOF.
pub struct Lines<S> {
    source: S,
}

impl<S: LineSource> Lines<S> {
    /// Wrap a source in a line iterator.
    pub fn new(source: S) -> Self {
        Lines { source }
    }
}

impl<S: LineSource> Iterator for Lines<S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        read_line_from(&mut self.source, true)
    }
}

/// Iterator over the stripped lines of standard input.
///
/// Holds the stdin lock until dropped.
pub fn lines() -> Lines<StdinLock<'static>> {
    Lines::new(io::stdin().lock())
}

/// Remove a trailing LF, or CRLF, and nothing else.
///
/// Operates on bytes, before decoding, so encoding repair can never eat
/// or fabricate a terminator. A trailing bare CR is not a terminator.
fn strip_terminator(mut bytes: &[u8]) -> &[u8] {
    if bytes.last() == Some(&b'\n') {
        bytes = &bytes[..bytes.len() - 1];
        if bytes.last() == Some(&b'\r') {
            bytes = &bytes[..bytes.len() - 1];
        }
    }
    bytes
}
