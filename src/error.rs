//! Error types for docspace library.

use std::io;
use thiserror::Error;

/// Result type alias for docspace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a document tree.
///
/// The blank-line operations themselves are defensive: unknown content is
/// treated as "not blank" and boundary conditions are not failures. The
/// variants here cover caller misuse and the I/O edges of the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing a document.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Body element index is out of range.
    #[error("Index {index} is out of range (body has {len} elements)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Cell paragraph index is out of range.
    #[error("Paragraph {index} is out of range (cell has {len} paragraphs)")]
    ParagraphOutOfRange { index: usize, len: usize },

    /// A table cell was built without any paragraph.
    #[error("Table cell must contain at least one paragraph")]
    EmptyCell,

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Serialization(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyCell;
        assert_eq!(
            err.to_string(),
            "Table cell must contain at least one paragraph"
        );

        let err = Error::IndexOutOfRange { index: 10, len: 5 };
        assert_eq!(
            err.to_string(),
            "Index 10 is out of range (body has 5 elements)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
