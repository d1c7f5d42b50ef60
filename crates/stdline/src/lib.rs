//! Stdline — line-oriented standard-input reading
//!
//! Reads one line of text at a time from a byte-oriented source,
//! normalizes line endings, repairs invalid UTF-8, and reports
//! end-of-stream distinctly from an empty line. An interactive prompt
//! layer (prompts, confirmation, menus, hidden password input, history)
//! is built on top of the same reader.
//!
//! All I/O is synchronous and blocking. The crate never opens or closes
//! standard input; it only advances its read cursor.
//!
//! # Known limitation
//!
//! Only LF (`\n`) and CRLF (`\r\n`) are recognized as line terminators.
//! Unicode newline sequences (NEL, LS, PS, bare CR) are not special-cased.

#![warn(missing_docs)]

pub mod error;
pub mod read;
pub mod readline;
pub mod source;

pub use error::Error;
pub use read::{lines, read_all, read_line, read_line_from, Lines};
pub use readline::{confirm, password, prompt, select, Readline};
pub use source::{LineSource, RawRead};
