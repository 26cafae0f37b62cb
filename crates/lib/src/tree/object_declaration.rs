//! Object declaration lists: indexed declaration sequences.

use automerge::{Automerge, ObjId};

use crate::{
    schema::{ObjectShape, TypedNode},
    tree::{Children, Node, Number, Value, ValueType, Visitor},
};

/// Lazy range over an object declaration list's entries.
pub type ObjectDeclarationValues<'a> = Children<'a, ObjectDeclarationListValue<'a>>;

/// An ordered list of object declarations.
///
/// Backed by a map of exactly two entries, `type` and `values`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectDeclarationList<'a> {
    node: Node<'a>,
}

impl<'a> ObjectDeclarationList<'a> {
    /// Project `obj` as an object declaration list, validating its shape.
    pub fn new(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Self::from_object(doc, obj)
    }

    /// The underlying document view.
    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    /// The value-type tag for object declaration lists.
    ///
    /// Fixed per node type rather than read back out of the document; the
    /// document only has to agree with it structurally.
    pub const fn get_type(&self) -> ValueType {
        ValueType::ObjectDeclarationList
    }

    /// The list's entries, as a lazy range.
    pub fn get_values(&self) -> crate::Result<ObjectDeclarationValues<'a>> {
        self.node.children(Self::NAME, "values")
    }

    /// Dispatch to the visitor's object declaration list method.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_object_declaration_list(self)
    }
}

impl<'a> TypedNode<'a> for ObjectDeclarationList<'a> {
    const NAME: &'static str = "ObjectDeclarationList";
    const SHAPE: ObjectShape = ObjectShape::map(2);

    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Ok(ObjectDeclarationList {
            node: Node::with_schema::<Self>(doc, obj)?,
        })
    }
}

/// One entry of an object declaration list: an index paired with a value.
///
/// Backed by a map of exactly two entries, `index` and `value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectDeclarationListValue<'a> {
    node: Node<'a>,
}

impl<'a> ObjectDeclarationListValue<'a> {
    /// Project `obj` as an object declaration list entry, validating its shape.
    pub fn new(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Self::from_object(doc, obj)
    }

    /// The underlying document view.
    pub fn node(&self) -> &Node<'a> {
        &self.node
    }

    /// The entry's position in the declaration order.
    pub fn get_index(&self) -> crate::Result<Number> {
        self.node.number(Self::NAME, "index")
    }

    /// The declared value.
    pub fn get_value(&self) -> crate::Result<Value<'a>> {
        self.node.value(Self::NAME, "value")
    }

    /// Dispatch to the visitor's object declaration list value method.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_object_declaration_list_value(self)
    }
}

impl<'a> TypedNode<'a> for ObjectDeclarationListValue<'a> {
    const NAME: &'static str = "ObjectDeclarationListValue";
    const SHAPE: ObjectShape = ObjectShape::map(2);

    fn from_object(doc: &'a Automerge, obj: ObjId) -> crate::Result<Self> {
        Ok(ObjectDeclarationListValue {
            node: Node::with_schema::<Self>(doc, obj)?,
        })
    }
}
