//! Error types for the text utilities.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failed invocation, carrying the program name for stderr output.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output (e.g. "cat", "uniq").
    pub program: String,
    /// Underlying error produced by processing.
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl InvocationError {
    /// Wraps `source` with the name of the program that failed.
    pub fn new(program: &str, source: Error) -> Self {
        Self {
            program: program.to_string(),
            source,
        }
    }
}

/// Main error type for utility operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while reading an opened input
    #[error("{path}: {source}")]
    Read {
        /// Display name of the input
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write to standard output
    #[error("write error: {source}")]
    Write {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An input line exceeded the accepted length
    #[error("{path}: line {line} is longer than {limit} bytes")]
    LineTooLong {
        /// Display name of the input
        path: String,
        /// 1-based number of the offending line
        line: u64,
        /// Maximum accepted length in bytes
        limit: usize,
    },
}

/// Specialized `Result` type for utility operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attaches the input name to an engine error.
    pub fn from_core(path: &str, err: text_core::Error) -> Self {
        match err {
            text_core::Error::Read(source) => Error::Read {
                path: path.to_string(),
                source,
            },
            text_core::Error::Write(source) => Error::Write { source },
            text_core::Error::LineTooLong { line, limit } => Error::LineTooLong {
                path: path.to_string(),
                line,
                limit,
            },
        }
    }
}
