//! Error types and result handling for line processing operations.

use std::fmt;
use std::io;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the streaming operations.
///
/// Read and write failures are kept apart so callers can attach the input
/// name to the former only.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while reading input.
    Read(io::Error),

    /// I/O failure while writing output.
    Write(io::Error),

    /// An input line is longer than the configured bound.
    LineTooLong {
        /// 1-based number of the offending line
        line: u64,
        /// Maximum accepted length in bytes
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(err) => write!(f, "read error: {err}"),
            Error::Write(err) => write!(f, "write error: {err}"),
            Error::LineTooLong { line, limit } => {
                write!(f, "line {line} is longer than {limit} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(err) | Error::Write(err) => Some(err),
            Error::LineTooLong { .. } => None,
        }
    }
}
