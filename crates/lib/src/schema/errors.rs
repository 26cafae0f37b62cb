//! Error types for shape validation.
//!
//! This module defines structured error types for structural failures: a backing
//! object whose kind, size, or key layout disagrees with the shape a typed node
//! declares for itself.

use thiserror::Error;

use super::ObjectShape;

/// Structured error types for shape validation.
///
/// Shape checks run exactly once, when a typed node is constructed. Key layout
/// and element lookups are validated lazily by accessors, so the structural
/// variants here can also surface from an accessor or a child range step.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The backing object does not have the shape the node type declares
    #[error("{node_type} expects a {expected}, found a {observed}")]
    ShapeMismatch {
        node_type: &'static str,
        expected: ObjectShape,
        observed: ObjectShape,
    },

    /// A declared property key is absent from the backing object
    #[error("{node_type}.{property}: missing from the backing object")]
    MissingProperty {
        node_type: &'static str,
        property: String,
    },

    /// The object reference does not name a container object in the document
    #[error("{node_type}: backing reference is not an object: {source}")]
    NotAnObject {
        node_type: &'static str,
        #[source]
        source: automerge::AutomergeError,
    },

    /// The document store rejected a lookup the schema requires
    #[error("{node_type}.{property}: document read failed: {source}")]
    ReadFailed {
        node_type: &'static str,
        property: String,
        #[source]
        source: automerge::AutomergeError,
    },
}

impl SchemaError {
    /// Check if this error is a kind or size mismatch found at construction
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, SchemaError::ShapeMismatch { .. })
    }

    /// Check if this error is a missing property key
    pub fn is_missing_property(&self) -> bool {
        matches!(self, SchemaError::MissingProperty { .. })
    }

    /// Get the node type whose schema was violated
    pub fn node_type(&self) -> &'static str {
        match *self {
            SchemaError::ShapeMismatch { node_type, .. }
            | SchemaError::MissingProperty { node_type, .. }
            | SchemaError::NotAnObject { node_type, .. }
            | SchemaError::ReadFailed { node_type, .. } => node_type,
        }
    }
}

// Conversion from SchemaError to the main Error type
impl From<SchemaError> for crate::Error {
    fn from(err: SchemaError) -> Self {
        crate::Error::Schema(err)
    }
}
