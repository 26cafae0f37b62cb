//! Declaration keywords.

use std::{fmt, str::FromStr};

use crate::tree::TreeError;

/// The closed set of keywords that can prefix a declaration.
///
/// Spellings round-trip: parsing a declared spelling and rendering it back
/// yields the same text, and any other text fails to parse.
///
/// # Examples
///
/// ```
/// use usdj_am::DeclarationKeyword;
///
/// let keyword: DeclarationKeyword = "uniform".parse()?;
/// assert_eq!(keyword, DeclarationKeyword::Uniform);
/// assert_eq!(keyword.as_str(), "uniform");
/// assert!("uniformly".parse::<DeclarationKeyword>().is_err());
/// # Ok::<(), usdj_am::tree::TreeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKeyword {
    Varying,
    Uniform,
    Custom,
    Prepend,
    Append,
    Delete,
    Add,
}

impl DeclarationKeyword {
    /// Every declared keyword, in grammar order.
    pub const ALL: [DeclarationKeyword; 7] = [
        DeclarationKeyword::Varying,
        DeclarationKeyword::Uniform,
        DeclarationKeyword::Custom,
        DeclarationKeyword::Prepend,
        DeclarationKeyword::Append,
        DeclarationKeyword::Delete,
        DeclarationKeyword::Add,
    ];

    /// The keyword's textual spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclarationKeyword::Varying => "varying",
            DeclarationKeyword::Uniform => "uniform",
            DeclarationKeyword::Custom => "custom",
            DeclarationKeyword::Prepend => "prepend",
            DeclarationKeyword::Append => "append",
            DeclarationKeyword::Delete => "delete",
            DeclarationKeyword::Add => "add",
        }
    }
}

impl fmt::Display for DeclarationKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeclarationKeyword {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "varying" => Ok(DeclarationKeyword::Varying),
            "uniform" => Ok(DeclarationKeyword::Uniform),
            "custom" => Ok(DeclarationKeyword::Custom),
            "prepend" => Ok(DeclarationKeyword::Prepend),
            "append" => Ok(DeclarationKeyword::Append),
            "delete" => Ok(DeclarationKeyword::Delete),
            "add" => Ok(DeclarationKeyword::Add),
            _ => Err(TreeError::UnknownSpelling {
                keyword: "DeclarationKeyword",
                spelling: s.to_string(),
            }),
        }
    }
}
