//! Unified error type for nanval.
//!
//! Sentinel substitution is not an error; everything that is lands here.
use thiserror::Error;

/// Main error type for nanval operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading records
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token is neither the marker nor a valid floating-point literal
    #[error("Malformed number: {token:?}")]
    MalformedNumber { token: String },

    /// Record line is not valid UTF-8
    #[error("Invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },

    /// A field failed to convert inside a record
    #[error("Line {line}, column {column}: {source}")]
    Record {
        line: usize,
        column: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn malformed(token: &[u8]) -> Self {
        Error::MalformedNumber {
            token: String::from_utf8_lossy(token).into_owned(),
        }
    }

    pub(crate) fn in_record(self, line: usize, column: usize) -> Self {
        Error::Record {
            line,
            column,
            source: Box::new(self),
        }
    }
}

/// Result type for nanval operations.
pub type Result<T> = std::result::Result<T, Error>;
