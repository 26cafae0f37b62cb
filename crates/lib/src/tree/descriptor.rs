//! Descriptor nodes: prim metadata blocks.

use automerge::{Automerge, ObjId};

use crate::{
    schema::{ObjectShape, TypedNode},
    tree::{Assignment, Children, Node, Visitor},
};

/// Lazy range over a descriptor's assignments.
pub type Assignments<'a> = Children<'a, Assignment<'a>>;

/// A prim metadata block: an optional description plus a list of assignments.
///
/// Backed by a map of exactly two entries, `description` and `assignments`.
///
/// # Examples
///
/// Projecting the root object of a loaded document:
///
/// ```no_run
/// use usdj_am::{Descriptor, Document};
///
/// let document = Document::load("scene.am")?;
/// let descriptor = Descriptor::new(document.automerge(), document.root())?;
/// for assignment in &descriptor.get_assignments()? {
///     println!("{}", assignment?.get_identifier()?);
/// }
/// # Ok::<(), usdj_am::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor<'a> {
    node: Node<'a>,
}

impl<'a> Descriptor<'a> {
    /// Project `obj` as a descriptor, validating its shape.
    pub fn new(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Self::from_object(doc, obj)
    }

    /// The underlying document view.
    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    /// The descriptor's description, if one is set.
    ///
    /// The grammar stores "no description" as an explicit null, which reads
    /// back as `None`.
    pub fn get_description(&self) -> crate::Result<Option<String>> {
        self.node.optional_string(Self::NAME, "description")
    }

    /// The descriptor's assignments, as a lazy range.
    pub fn get_assignments(&self) -> crate::Result<Assignments<'a>> {
        self.node.children(Self::NAME, "assignments")
    }

    /// Dispatch to the visitor's descriptor method.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_descriptor(self)
    }
}

impl<'a> TypedNode<'a> for Descriptor<'a> {
    const NAME: &'static str = "Descriptor";
    const SHAPE: ObjectShape = ObjectShape::map(2);

    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Ok(Descriptor {
            node: Node::with_schema::<Self>(doc, obj)?,
        })
    }
}
