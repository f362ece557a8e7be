//! Error types for template operations.

use std::io;

/// Result type alias for template operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Template error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error reading a template file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid encoding.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Row width does not match the table header.
    #[error("Row has {found} cells, table has {expected} columns")]
    ColumnCount {
        /// Number of columns in the header.
        expected: usize,
        /// Number of cells in the rejected row.
        found: usize,
    },
}
