//! Value-type tags for composite value forms.

use std::{fmt, str::FromStr};

use crate::tree::TreeError;

/// Discriminant tags the grammar attaches to composite value forms.
///
/// Typed nodes that carry a tag expose it through a `get_type()` constant;
/// the textual spellings appear in the stored documents. Spellings round-trip
/// the same way [`crate::DeclarationKeyword`] spellings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Assignment,
    ClassDeclaration,
    Declaration,
    Definition,
    ExternalReference,
    ExternalReferenceImport,
    ExternalReferenceSrc,
    ObjectDeclarationList,
    ObjectValue,
    VariantDefinition,
    VariantSet,
}

impl ValueType {
    /// Every declared tag, in grammar order.
    pub const ALL: [ValueType; 11] = [
        ValueType::Assignment,
        ValueType::ClassDeclaration,
        ValueType::Declaration,
        ValueType::Definition,
        ValueType::ExternalReference,
        ValueType::ExternalReferenceImport,
        ValueType::ExternalReferenceSrc,
        ValueType::ObjectDeclarationList,
        ValueType::ObjectValue,
        ValueType::VariantDefinition,
        ValueType::VariantSet,
    ];

    /// The tag's textual spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::Assignment => "assignment",
            ValueType::ClassDeclaration => "classDeclaration",
            ValueType::Declaration => "declaration",
            ValueType::Definition => "definition",
            ValueType::ExternalReference => "externalReference",
            ValueType::ExternalReferenceImport => "externalReferenceImport",
            ValueType::ExternalReferenceSrc => "externalReferenceSrc",
            ValueType::ObjectDeclarationList => "objectDeclarationList",
            ValueType::ObjectValue => "objectValue",
            ValueType::VariantDefinition => "variantDefinition",
            ValueType::VariantSet => "variantSet",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(ValueType::Assignment),
            "classDeclaration" => Ok(ValueType::ClassDeclaration),
            "declaration" => Ok(ValueType::Declaration),
            "definition" => Ok(ValueType::Definition),
            "externalReference" => Ok(ValueType::ExternalReference),
            "externalReferenceImport" => Ok(ValueType::ExternalReferenceImport),
            "externalReferenceSrc" => Ok(ValueType::ExternalReferenceSrc),
            "objectDeclarationList" => Ok(ValueType::ObjectDeclarationList),
            "objectValue" => Ok(ValueType::ObjectValue),
            "variantDefinition" => Ok(ValueType::VariantDefinition),
            "variantSet" => Ok(ValueType::VariantSet),
            _ => Err(TreeError::UnknownSpelling {
                keyword: "ValueType",
                spelling: s.to_string(),
            }),
        }
    }
}
