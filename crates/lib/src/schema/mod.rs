//! Declarative shape contract for typed nodes.
//!
//! Every typed node in the catalog is backed by one container object inside an
//! Automerge document. The shape of that object (its kind and its entry count)
//! is fixed by the scene grammar, so each node type declares it once through
//! [`TypedNode`] and construction validates it exactly once. Everything finer
//! than kind and size (key spellings, value types) is checked lazily by the
//! accessors that need it.

use std::fmt;

use automerge::{Automerge, ObjId, ObjType, ReadDoc};

pub mod errors;

pub use errors::SchemaError;

/// The kind of data a document reference points at.
///
/// This is the adapter's view of the store: maps keyed by strings, lists
/// indexed by position, and scalars for everything that is not a container.
/// Automerge's `Table` objects observe as [`ObjectKind::Map`] and its `Text`
/// objects as [`ObjectKind::Scalar`]; neither occurs in scene documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Map,
    List,
    Scalar,
}

impl From<ObjType> for ObjectKind {
    fn from(ty: ObjType) -> Self {
        match ty {
            ObjType::Map | ObjType::Table => ObjectKind::Map,
            ObjType::List => ObjectKind::List,
            ObjType::Text => ObjectKind::Scalar,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Map => write!(f, "map"),
            ObjectKind::List => write!(f, "list"),
            ObjectKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// The shape of a backing object: kind plus entry count.
///
/// A declared shape is the construction precondition of a typed node; an
/// observed shape is what the document actually holds. The two are compared
/// with plain equality.
///
/// # Examples
///
/// ```
/// use usdj_am::schema::ObjectShape;
///
/// let shape = ObjectShape::map(2);
/// assert_eq!(shape.to_string(), "map of 2 entries");
/// assert_eq!(ObjectShape::list(1).to_string(), "list of 1 element");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectShape {
    pub kind: ObjectKind,
    pub size: usize,
}

impl ObjectShape {
    /// A map object with exactly `size` entries.
    pub const fn map(size: usize) -> Self {
        ObjectShape {
            kind: ObjectKind::Map,
            size,
        }
    }

    /// A list object with exactly `size` elements.
    pub const fn list(size: usize) -> Self {
        ObjectShape {
            kind: ObjectKind::List,
            size,
        }
    }

    /// A non-container value. Used only on the observed side of a mismatch.
    pub const fn scalar() -> Self {
        ObjectShape {
            kind: ObjectKind::Scalar,
            size: 0,
        }
    }

    /// Read the actual shape of `obj` out of the document.
    ///
    /// Fails if `obj` does not name a container object in `doc`.
    pub fn observe(doc: &Automerge, obj: &ObjId) -> Result<Self, automerge::AutomergeError> {
        let kind = doc.object_type(obj)?;
        let size = doc.length(obj);
        Ok(ObjectShape {
            kind: kind.into(),
            size,
        })
    }
}

impl fmt::Display for ObjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ObjectKind::Map => {
                let noun = if self.size == 1 { "entry" } else { "entries" };
                write!(f, "map of {} {noun}", self.size)
            }
            ObjectKind::List => {
                let noun = if self.size == 1 { "element" } else { "elements" };
                write!(f, "list of {} {noun}", self.size)
            }
            ObjectKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// Static schema binding for a typed node.
///
/// This trait is the centralized shape table: one implementation per concrete
/// node type, carrying the diagnostic name, the declared shape, and the typed
/// constructor. Adding a node type to the catalog means adding one
/// implementation here and one visit method to [`crate::tree::Visitor`].
pub trait TypedNode<'a>: Sized {
    /// Node type name used in diagnostics.
    const NAME: &'static str;

    /// Shape the backing object must have.
    const SHAPE: ObjectShape;

    /// Project `obj` as this node type, validating the declared shape.
    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self>;
}
