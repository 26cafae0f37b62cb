//! Error types for document loading and saving.

use std::path::PathBuf;

use thiserror::Error;

/// Structured error types for the document store adapter.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Reading the document file from disk failed
    #[error("failed to read document file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the document file to disk failed
    #[error("failed to write document file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes do not decode as an Automerge document
    #[error("failed to decode document: {source}")]
    LoadFailed {
        #[source]
        source: automerge::AutomergeError,
    },
}

impl DocumentError {
    /// Check if this error is I/O related
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            DocumentError::ReadFailed { .. } | DocumentError::WriteFailed { .. }
        )
    }

    /// Get the file path if this is a file-level error
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DocumentError::ReadFailed { path, .. } | DocumentError::WriteFailed { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

// Conversion from DocumentError to the main Error type
impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}
