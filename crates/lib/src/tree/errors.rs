//! Error types for the projection layer.
//!
//! This module defines structured error types for reads that find the right
//! structure but the wrong content: a property slot holding an unexpected
//! value type, a value extracted as an alternative it does not hold, or a
//! keyword spelled outside its closed set.

use thiserror::Error;

/// Structured error types for typed reads out of a scene document.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// A property slot holds a value outside its declared type
    #[error("{node_type}.{property}: expected {expected}, found {actual}")]
    TypeMismatch {
        node_type: &'static str,
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A value was extracted as an alternative it does not hold
    #[error("value read as {expected}, but it holds {actual}")]
    WrongAlternative {
        expected: &'static str,
        actual: &'static str,
    },

    /// A keyword's textual form matches none of its declared spellings
    #[error("unrecognized {keyword} spelling {spelling:?}")]
    UnknownSpelling {
        keyword: &'static str,
        spelling: String,
    },
}

impl TreeError {
    /// Check if this error is a type mismatch (wrong slot type or wrong
    /// value alternative)
    pub fn is_type_mismatch(&self) -> bool {
        matches!(
            self,
            TreeError::TypeMismatch { .. } | TreeError::WrongAlternative { .. }
        )
    }

    /// Check if this error is an unrecognized keyword spelling
    pub fn is_spelling_error(&self) -> bool {
        matches!(self, TreeError::UnknownSpelling { .. })
    }

    /// Get the expected type or alternative, if this is a mismatch
    pub fn expected(&self) -> Option<&'static str> {
        match *self {
            TreeError::TypeMismatch { expected, .. }
            | TreeError::WrongAlternative { expected, .. } => Some(expected),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
