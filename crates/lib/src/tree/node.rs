//! The non-owning view every typed node is built on.

use std::fmt;

use automerge::{Automerge, ObjId, ObjType, ReadDoc, ScalarValue, Value as AmValue};

use crate::{
    schema::{ObjectShape, SchemaError, TypedNode},
    tree::{Children, Number, TreeError, Value},
};

/// A schema-validated view over one object in a document snapshot.
///
/// A node is nothing but a document handle paired with an object reference;
/// copying one duplicates the pair. The shape of the backing object is
/// validated when the typed wrapper is constructed and never again, and no
/// data is cached: every accessor re-reads the document, so a node stays
/// coherent with the snapshot it was created from.
pub struct Node<'a> {
    doc: &'a Automerge,
    obj: ObjId,
}

impl<'a> Node<'a> {
    /// Validate `obj` against `T`'s declared shape and wrap it.
    ///
    /// This is the single structural validation point for the whole catalog.
    pub(crate) fn with_schema<T: TypedNode<'a>>(
        doc: &'a Automerge,
        obj: ObjId,
    ) -> Result<Self, SchemaError> {
        let observed =
            ObjectShape::observe(doc, &obj).map_err(|source| SchemaError::NotAnObject {
                node_type: T::NAME,
                source,
            })?;
        if observed != T::SHAPE {
            return Err(SchemaError::ShapeMismatch {
                node_type: T::NAME,
                expected: T::SHAPE,
                observed,
            });
        }
        Ok(Node { doc, obj })
    }

    /// The document this node reads from.
    pub fn document(&self) -> &'a Automerge {
        self.doc
    }

    /// The reference to the backing object.
    pub fn object(&self) -> &ObjId {
        &self.obj
    }

    /// Fetch a property slot, failing when the key is absent.
    pub(crate) fn slot(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<(AmValue<'a>, ObjId)> {
        match self.doc.get(&self.obj, key) {
            Ok(Some(found)) => Ok(found),
            Ok(None) => Err(SchemaError::MissingProperty {
                node_type,
                property: key.to_string(),
            }
            .into()),
            Err(source) => Err(SchemaError::ReadFailed {
                node_type,
                property: key.to_string(),
                source,
            }
            .into()),
        }
    }

    /// Read a property that must hold a string.
    pub(crate) fn string(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<String> {
        let (value, _) = self.slot(node_type, key)?;
        match &value {
            AmValue::Scalar(scalar) => match scalar.as_ref() {
                ScalarValue::Str(text) => Ok(text.to_string()),
                _ => Err(self.mismatch(node_type, key, "string", &value)),
            },
            _ => Err(self.mismatch(node_type, key, "string", &value)),
        }
    }

    /// Read a property that holds either a string or an explicit null.
    pub(crate) fn optional_string(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<Option<String>> {
        let (value, _) = self.slot(node_type, key)?;
        match &value {
            AmValue::Scalar(scalar) => match scalar.as_ref() {
                ScalarValue::Str(text) => Ok(Some(text.to_string())),
                ScalarValue::Null => Ok(None),
                _ => Err(self.mismatch(node_type, key, "string or null", &value)),
            },
            _ => Err(self.mismatch(node_type, key, "string or null", &value)),
        }
    }

    /// Read a property that must hold a number.
    pub(crate) fn number(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<Number> {
        let (value, _) = self.slot(node_type, key)?;
        match &value {
            AmValue::Scalar(scalar) => match scalar.as_ref() {
                ScalarValue::Int(int) => Ok(Number::Int(*int)),
                ScalarValue::Uint(uint) => Ok(Number::Uint(*uint)),
                ScalarValue::F64(float) => Ok(Number::Float(*float)),
                _ => Err(self.mismatch(node_type, key, "number", &value)),
            },
            _ => Err(self.mismatch(node_type, key, "number", &value)),
        }
    }

    /// Read a property as a projected [`Value`].
    pub(crate) fn value(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<Value<'a>> {
        let (value, obj) = self.slot(node_type, key)?;
        Value::from_slot(self.doc, value, obj, node_type, key.to_string())
    }

    /// Read a property that must hold a list of `T` children.
    pub(crate) fn children<T: TypedNode<'a>>(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<Children<'a, T>> {
        let (value, obj) = self.slot(node_type, key)?;
        match value {
            AmValue::Object(ObjType::List) => Ok(Children::new(self.doc, obj)),
            _ => Err(self.mismatch(node_type, key, "list", &value)),
        }
    }

    /// Read a property that holds either a `T` child or an explicit null.
    pub(crate) fn optional_child<T: TypedNode<'a>>(
        &self,
        node_type: &'static str,
        key: &'static str,
    ) -> crate::Result<Option<T>> {
        let (value, obj) = self.slot(node_type, key)?;
        match &value {
            AmValue::Object(ObjType::Map) => Ok(Some(T::from_object(self.doc, obj)?)),
            AmValue::Scalar(scalar) if matches!(scalar.as_ref(), ScalarValue::Null) => Ok(None),
            _ => Err(self.mismatch(node_type, key, "map or null", &value)),
        }
    }

    fn mismatch(
        &self,
        node_type: &'static str,
        key: &'static str,
        expected: &'static str,
        found: &AmValue<'_>,
    ) -> crate::Error {
        TreeError::TypeMismatch {
            node_type,
            property: key.to_string(),
            expected,
            actual: type_name(found),
        }
        .into()
    }
}

impl Clone for Node<'_> {
    fn clone(&self) -> Self {
        Node {
            doc: self.doc,
            obj: self.obj.clone(),
        }
    }
}

/// Two nodes are equal when they view the same object of the same document.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.obj == other.obj
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("object", &self.obj)
            .finish_non_exhaustive()
    }
}

/// Diagnostic name for whatever a document slot holds.
pub(crate) fn type_name(value: &AmValue<'_>) -> &'static str {
    match value {
        AmValue::Object(ObjType::Map) => "map",
        AmValue::Object(ObjType::Table) => "table",
        AmValue::Object(ObjType::List) => "list",
        AmValue::Object(ObjType::Text) => "text",
        AmValue::Scalar(scalar) => scalar_type_name(scalar.as_ref()),
    }
}

/// Diagnostic name for a scalar value.
pub(crate) fn scalar_type_name(scalar: &ScalarValue) -> &'static str {
    match scalar {
        ScalarValue::Str(_) => "string",
        ScalarValue::Int(_) => "int",
        ScalarValue::Uint(_) => "uint",
        ScalarValue::F64(_) => "float",
        ScalarValue::Boolean(_) => "boolean",
        ScalarValue::Null => "null",
        _ => "scalar",
    }
}
