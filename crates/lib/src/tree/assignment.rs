//! Assignment nodes: one `identifier = value` binding.

use automerge::{Automerge, ObjId};

use crate::{
    schema::{ObjectShape, TypedNode},
    tree::{DeclarationKeyword, Node, Value, ValueType, Visitor},
};

/// One property binding inside a descriptor.
///
/// Backed by a map of exactly four entries: `type`, `keyword`, `identifier`,
/// and `value`. The keyword slot is an explicit null when the binding has no
/// leading keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<'a> {
    node: Node<'a>,
}

impl<'a> Assignment<'a> {
    /// Project `obj` as an assignment, validating its shape.
    pub fn new(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Self::from_object(doc, obj)
    }

    /// The underlying document view.
    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    /// The value-type tag for assignments.
    ///
    /// Fixed per node type rather than read back out of the document; the
    /// document only has to agree with it structurally.
    pub const fn get_type(&self) -> ValueType {
        ValueType::Assignment
    }

    /// The assignment's leading keyword, if it has one.
    pub fn get_keyword(&self) -> crate::Result<Option<DeclarationKeyword>> {
        match self.node.optional_string(Self::NAME, "keyword")? {
            Some(text) => Ok(Some(text.parse()?)),
            None => Ok(None),
        }
    }

    /// The identifier being bound.
    pub fn get_identifier(&self) -> crate::Result<String> {
        self.node.string(Self::NAME, "identifier")
    }

    /// The bound value.
    pub fn get_value(&self) -> crate::Result<Value<'a>> {
        self.node.value(Self::NAME, "value")
    }

    /// Dispatch to the visitor's assignment method.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_assignment(self)
    }
}

impl<'a> TypedNode<'a> for Assignment<'a> {
    const NAME: &'static str = "Assignment";
    const SHAPE: ObjectShape = ObjectShape::map(4);

    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Ok(Assignment {
            node: Node::with_schema::<Self>(doc, obj)?,
        })
    }
}
