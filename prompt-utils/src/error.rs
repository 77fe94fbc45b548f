//! Error types for interactive prompt operations.

use std::io;

use thiserror::Error;

/// Main error type for prompt operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Selector was given an empty choice list
    #[error("Choice list is empty")]
    EmptyChoices,

    /// Column bound below the minimum of one
    #[error("Unsupported column count: {value} (must be at least 1)")]
    InvalidMaxColumns {
        /// The invalid column bound
        value: usize,
    },

    /// Retry budget exhausted without a valid response
    #[error("No valid selection after {attempts} attempts")]
    RetriesExhausted {
        /// Number of invalid responses received
        attempts: usize,
    },

    /// Input stream closed while a response was still expected
    #[error("Input stream closed while awaiting a response")]
    UnexpectedEof,

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for prompt operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}
