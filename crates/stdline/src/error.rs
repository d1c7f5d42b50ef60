//! Error types
//!
//! End-of-stream is not an error anywhere in this crate; it is signaled
//! by the absence of a returned value. These variants cover the few
//! paths that can genuinely fail.

use std::io;
use std::path::PathBuf;

/// Errors from stdline operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A history file could not be read or written
    #[error("history file {}: {source}", path.display())]
    History {
        /// Path of the offending history file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Standard input failed mid-read on a path that surfaces errors
    #[error("stdin: {0}")]
    Stdin(#[from] io::Error),
}
