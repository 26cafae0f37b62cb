//! Reference file nodes: external file references with optional metadata.

use automerge::{Automerge, ObjId};

use crate::{
    schema::{ObjectShape, TypedNode},
    tree::{Descriptor, Node, ValueType, Visitor},
};

/// A reference to an external scene file.
///
/// Backed by a map of exactly three entries: `type`, `src`, and `descriptor`.
/// The descriptor slot is an explicit null when the reference carries no
/// metadata of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceFile<'a> {
    node: Node<'a>,
}

impl<'a> ReferenceFile<'a> {
    /// Project `obj` as a reference file, validating its shape.
    pub fn new(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Self::from_object(doc, obj)
    }

    /// The underlying document view.
    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    /// The value-type tag for reference files.
    ///
    /// Fixed per node type rather than read back out of the document; the
    /// document only has to agree with it structurally.
    pub const fn get_type(&self) -> ValueType {
        ValueType::ExternalReferenceSrc
    }

    /// The referenced file path.
    pub fn get_src(&self) -> crate::Result<String> {
        self.node.string(Self::NAME, "src")
    }

    /// The reference's own descriptor, if it carries one.
    pub fn get_descriptor(&self) -> crate::Result<Option<Descriptor<'a>>> {
        self.node.optional_child(Self::NAME, "descriptor")
    }

    /// Dispatch to the visitor's reference file method.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_reference_file(self)
    }
}

impl<'a> TypedNode<'a> for ReferenceFile<'a> {
    const NAME: &'static str = "ReferenceFile";
    const SHAPE: ObjectShape = ObjectShape::map(3);

    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Ok(ReferenceFile {
            node: Node::with_schema::<Self>(doc, obj)?,
        })
    }
}
