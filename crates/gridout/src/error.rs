//! Error taxonomy for table writing.
//!
//! Errors are distinguishable by kind so callers can decide whether to
//! retry (say, after supplying a header) or treat the failure as
//! unrecoverable (an unsupported capability). Classification failures
//! are never surfaced; they degrade to fallback types inside the
//! preprocessing pipeline.

use thiserror::Error;

/// Error kind for the table writer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The format requires a table name and none (or a blank one) was set.
    #[error("table name expected to be a string with one or more characters")]
    EmptyTableName,

    /// The format requires a header and the header list is empty.
    #[error("header expected to have one or more names")]
    EmptyHeader,

    /// Header, value matrix, and classified matrix are all empty.
    #[error("the table has no header and no value rows to write")]
    EmptyTableData,

    /// The output stream was closed or never set.
    #[error("null output stream")]
    NullStream,

    /// Iterative writing was requested on a format that cannot split
    /// its output.
    #[error("the {0} format does not support iterative writing")]
    NotSupported(&'static str),

    /// Underlying stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(Error::EmptyHeader.to_string().contains("header"));
        assert!(Error::NotSupported("html").to_string().contains("html"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
