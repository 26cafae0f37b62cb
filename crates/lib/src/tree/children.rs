//! Lazy forward-only ranges over list-backed children.

use std::{fmt, iter::FusedIterator, marker::PhantomData};

use automerge::{Automerge, ObjId, ReadDoc, Value as AmValue};

use crate::schema::{ObjectShape, SchemaError, TypedNode};

/// A lazy range over the typed children stored in one list object.
///
/// The length is captured when the range is created; elements are fetched
/// and typed one step at a time, so walking a range costs one document read
/// plus one shape validation per step and nothing is materialized up front.
/// The range itself holds no cursor: cloning one does not capture a position,
/// and every call to [`Children::iter`] starts over from the front.
pub struct Children<'a, T> {
    doc: &'a Automerge,
    obj: ObjId,
    len: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: TypedNode<'a>> Children<'a, T> {
    pub(crate) fn new(doc: &'a Automerge, obj: ObjId) -> Self {
        let len = doc.length(&obj);
        Children {
            doc,
            obj,
            len,
            _marker: PhantomData,
        }
    }

    /// Number of children in the backing list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the backing list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fetch and type the child at `index`.
    ///
    /// A child that is not an object, or whose shape fails `T`'s schema,
    /// fails with the same structural error direct construction would raise.
    pub fn get(&self, index: usize) -> crate::Result<T> {
        let (value, obj) = match self.doc.get(&self.obj, index) {
            Ok(Some(found)) => found,
            Ok(None) => {
                return Err(SchemaError::MissingProperty {
                    node_type: T::NAME,
                    property: format!("[{index}]"),
                }
                .into());
            }
            Err(source) => {
                return Err(SchemaError::ReadFailed {
                    node_type: T::NAME,
                    property: format!("[{index}]"),
                    source,
                }
                .into());
            }
        };
        match value {
            AmValue::Object(_) => T::from_object(self.doc, obj),
            AmValue::Scalar(_) => Err(SchemaError::ShapeMismatch {
                node_type: T::NAME,
                expected: T::SHAPE,
                observed: ObjectShape::scalar(),
            }
            .into()),
        }
    }

    /// Iterate the children from the front.
    pub fn iter(&self) -> ChildrenIter<'a, T> {
        ChildrenIter {
            children: self.clone(),
            index: 0,
        }
    }
}

impl<'a, T: TypedNode<'a>> IntoIterator for &'_ Children<'a, T> {
    type Item = crate::Result<T>;
    type IntoIter = ChildrenIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Clone for Children<'_, T> {
    fn clone(&self) -> Self {
        Children {
            doc: self.doc,
            obj: self.obj.clone(),
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Children<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("object", &self.obj)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Forward-only cursor over a [`Children`] range.
///
/// Each step yields `Ok` with the typed child or `Err` with the structural
/// failure for that element; the cursor advances either way, so a malformed
/// element fails its own step without poisoning the rest of the range.
pub struct ChildrenIter<'a, T> {
    children: Children<'a, T>,
    index: usize,
}

impl<'a, T: TypedNode<'a>> Iterator for ChildrenIter<'a, T> {
    type Item = crate::Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.children.len {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(self.children.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T: TypedNode<'a>> ExactSizeIterator for ChildrenIter<'a, T> {}

impl<'a, T: TypedNode<'a>> FusedIterator for ChildrenIter<'a, T> {}

impl<T> Clone for ChildrenIter<'_, T> {
    fn clone(&self) -> Self {
        ChildrenIter {
            children: self.children.clone(),
            index: self.index,
        }
    }
}

impl<T> fmt::Debug for ChildrenIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildrenIter")
            .field("children", &self.children)
            .field("index", &self.index)
            .finish()
    }
}
