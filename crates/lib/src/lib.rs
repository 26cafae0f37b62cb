//!
//! usdj-am: a typed, read-only projection of USDJ scene documents stored in Automerge.
//! USDA scene text is parsed upstream into JSON-shaped data and kept in an Automerge
//! document; this library projects that untyped map/list/scalar data into a typed
//! syntax tree without copying it out of the document.
//!
//! ## Core Concepts
//!
//! * **Documents (`document::Document`)**: An owned Automerge snapshot of one scene.
//!   Everything else borrows from it.
//! * **Nodes (`tree::Node`)**: Non-owning views pairing a document handle with an
//!   object reference. Constructing a typed node validates the backing object's
//!   shape (kind and size) exactly once; accessors re-read the document on every call.
//! * **Schemas (`schema::TypedNode`)**: The declarative shape table. Each typed node
//!   declares its name and required `schema::ObjectShape` in one place.
//! * **Values (`tree::Value`)**: The closed set of value alternatives a scene can
//!   hold: booleans, numbers, strings, nested value sequences, and file references.
//! * **Child ranges (`tree::Children`)**: Lazy forward-only ranges over list-backed
//!   children. Elements are fetched and typed one step at a time.
//! * **Visitors (`tree::Visitor`)**: Double dispatch for whole-tree algorithms over
//!   the closed node set.

pub mod document;
pub mod schema;
pub mod tree;

/// Re-export the document store adapter.
pub use document::Document;
/// Re-export the core projection types for easier access.
pub use tree::{
    Assignment, Children, ConstValues, DeclarationKeyword, Descriptor, Node, Number,
    ObjectDeclarationList, ObjectDeclarationListValue, ReferenceFile, Value, ValueType, Visitor,
};

/// Result type used throughout the usdj-am library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the usdj-am library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured document store errors from the document module
    #[error(transparent)]
    Document(document::DocumentError),

    /// Structured shape validation errors from the schema module
    #[error(transparent)]
    Schema(schema::SchemaError),

    /// Structured projection errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Document(_) => "document",
            Error::Schema(_) => "schema",
            Error::Tree(_) => "tree",
        }
    }

    /// Check if this error is a structural failure: the backing object's kind,
    /// size, or key layout disagrees with a node type's declared schema.
    pub fn is_structural_error(&self) -> bool {
        matches!(self, Error::Schema(_))
    }

    /// Check if this error is a shape mismatch raised when constructing a typed node.
    pub fn is_shape_mismatch(&self) -> bool {
        match self {
            Error::Schema(schema_err) => schema_err.is_shape_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch: a slot or value read as something
    /// it does not hold.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is a keyword spelling failure.
    pub fn is_spelling_error(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_spelling_error(),
            _ => false,
        }
    }

    /// Check if this error came from loading or decoding a document.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Document(doc_err) => doc_err.is_io_error(),
            _ => false,
        }
    }
}
