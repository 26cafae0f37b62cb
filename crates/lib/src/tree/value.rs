//! The closed set of value alternatives a scene can hold.

use std::fmt;

use automerge::{Automerge, ObjId, ObjType, ReadDoc, ScalarValue, Value as AmValue};

use crate::{
    schema::SchemaError,
    tree::{
        ReferenceFile, TreeError,
        node::{scalar_type_name, type_name},
    },
};

/// A scalar numeric value.
///
/// The document distinguishes signed integers, unsigned integers, and
/// floating point; consumers that only care about magnitude can collapse
/// the three with [`Number::to_f64`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Number {
    /// The value as a signed integer, if that is what it is.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(int) => Some(int),
            _ => None,
        }
    }

    /// The value as an unsigned integer, if that is what it is.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Number::Uint(uint) => Some(uint),
            _ => None,
        }
    }

    /// The value as a float, if that is what it is.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Number::Float(float) => Some(float),
            _ => None,
        }
    }

    /// Collapse to a float regardless of stored representation.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(int) => int as f64,
            Number::Uint(uint) => uint as f64,
            Number::Float(float) => float,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(int) => write!(f, "{int}"),
            Number::Uint(uint) => write!(f, "{uint}"),
            Number::Float(float) => write!(f, "{float}"),
        }
    }
}

/// One value slot of a scene document.
///
/// Exactly one alternative is populated per instance. Scalars are copied out
/// of the document; sequences and reference composites stay lazy views.
/// Extracting the wrong alternative fails with
/// [`TreeError::WrongAlternative`] naming both sides.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    Bool(bool),
    Number(Number),
    String(String),
    Values(ConstValues<'a>),
    ReferenceFile(ReferenceFile<'a>),
}

impl<'a> Value<'a> {
    /// Project a raw document slot into a typed value.
    ///
    /// `node_type` and `property` name the slot in diagnostics. A map-valued
    /// slot is projected as a [`ReferenceFile`] and validated on the spot, so
    /// a structurally different map fails loudly here rather than
    /// mis-projecting later.
    pub(crate) fn from_slot(
        doc: &'a Automerge,
        value: AmValue<'a>,
        obj: ObjId,
        node_type: &'static str,
        property: String,
    ) -> crate::Result<Self> {
        match &value {
            AmValue::Object(ObjType::List) => Ok(Value::Values(ConstValues::new(doc, obj))),
            AmValue::Object(ObjType::Map) => {
                Ok(Value::ReferenceFile(ReferenceFile::new(doc, obj)?))
            }
            AmValue::Scalar(scalar) => match scalar.as_ref() {
                ScalarValue::Boolean(b) => Ok(Value::Bool(*b)),
                ScalarValue::Int(int) => Ok(Value::Number(Number::Int(*int))),
                ScalarValue::Uint(uint) => Ok(Value::Number(Number::Uint(*uint))),
                ScalarValue::F64(float) => Ok(Value::Number(Number::Float(*float))),
                ScalarValue::Str(text) => Ok(Value::String(text.to_string())),
                other => Err(TreeError::TypeMismatch {
                    node_type,
                    property,
                    expected: "value",
                    actual: scalar_type_name(other),
                }
                .into()),
            },
            _ => Err(TreeError::TypeMismatch {
                node_type,
                property,
                expected: "value",
                actual: type_name(&value),
            }
            .into()),
        }
    }

    /// Which alternative this value holds, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Values(_) => "values",
            Value::ReferenceFile(_) => "reference file",
        }
    }

    /// Extract the boolean alternative.
    pub fn as_bool(&self) -> crate::Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.wrong_alternative("boolean")),
        }
    }

    /// Extract the numeric alternative.
    pub fn as_number(&self) -> crate::Result<Number> {
        match self {
            Value::Number(number) => Ok(*number),
            _ => Err(self.wrong_alternative("number")),
        }
    }

    /// Extract the string alternative.
    pub fn as_str(&self) -> crate::Result<&str> {
        match self {
            Value::String(text) => Ok(text),
            _ => Err(self.wrong_alternative("string")),
        }
    }

    /// Extract the nested value sequence alternative.
    pub fn as_values(&self) -> crate::Result<&ConstValues<'a>> {
        match self {
            Value::Values(values) => Ok(values),
            _ => Err(self.wrong_alternative("values")),
        }
    }

    /// Extract the file reference alternative.
    pub fn as_reference_file(&self) -> crate::Result<&ReferenceFile<'a>> {
        match self {
            Value::ReferenceFile(reference) => Ok(reference),
            _ => Err(self.wrong_alternative("reference file")),
        }
    }

    fn wrong_alternative(&self, expected: &'static str) -> crate::Error {
        TreeError::WrongAlternative {
            expected,
            actual: self.type_name(),
        }
        .into()
    }
}

/// A lazy, ordered sequence of nested [`Value`]s.
///
/// Backed by a list object in the document. The length is captured at
/// construction; elements are fetched and projected one at a time, and
/// each call to [`ConstValues::iter`] starts a fresh pass from the front.
#[derive(Clone)]
pub struct ConstValues<'a> {
    doc: &'a Automerge,
    obj: ObjId,
    len: usize,
}

impl<'a> ConstValues<'a> {
    pub(crate) fn new(doc: &'a Automerge, obj: ObjId) -> Self {
        let len = doc.length(&obj);
        ConstValues { doc, obj, len }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Project the element at `index`.
    pub fn get(&self, index: usize) -> crate::Result<Value<'a>> {
        let (value, obj) = match self.doc.get(&self.obj, index) {
            Ok(Some(found)) => found,
            Ok(None) => {
                return Err(SchemaError::MissingProperty {
                    node_type: "ConstValues",
                    property: format!("[{index}]"),
                }
                .into());
            }
            Err(source) => {
                return Err(SchemaError::ReadFailed {
                    node_type: "ConstValues",
                    property: format!("[{index}]"),
                    source,
                }
                .into());
            }
        };
        Value::from_slot(self.doc, value, obj, "ConstValues", format!("[{index}]"))
    }

    /// Iterate the sequence from the front.
    pub fn iter(&self) -> ConstValuesIter<'a> {
        ConstValuesIter {
            values: self.clone(),
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'_ ConstValues<'a> {
    type Item = crate::Result<Value<'a>>;
    type IntoIter = ConstValuesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ConstValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstValues")
            .field("object", &self.obj)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Forward-only cursor over a [`ConstValues`] sequence.
#[derive(Debug, Clone)]
pub struct ConstValuesIter<'a> {
    values: ConstValues<'a>,
    index: usize,
}

impl<'a> Iterator for ConstValuesIter<'a> {
    type Item = crate::Result<Value<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.values.len {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(self.values.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ConstValuesIter<'_> {}

impl std::iter::FusedIterator for ConstValuesIter<'_> {}
