//! Error types for table rendering.

use thiserror::Error;

/// Errors that can occur while rendering a table.
///
/// The error surface is intentionally narrow: malformed sort tokens and
/// unparsable cell values degrade gracefully instead of failing, so the only
/// domain error is a sort key that names no declared column.
#[derive(Debug, Error)]
pub enum Error {
    /// A sort key referenced a header missing from the schema.
    #[error("sort column '{0}' does not match any declared column")]
    UnknownSortColumn(String),

    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_column_names_the_column() {
        let err = Error::UnknownSortColumn("BOGUS".to_string());
        assert!(err.to_string().contains("BOGUS"));
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
