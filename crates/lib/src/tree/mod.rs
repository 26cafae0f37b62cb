//! The typed projection layer over a scene document.
//!
//! Nothing in this module owns scene data. Every type here is a lightweight
//! view into an Automerge document: constructing one validates the backing
//! object's declared shape exactly once, and every accessor re-reads the
//! document, so the projection can never drift from the snapshot it views.
//!
//! # Core Types
//!
//! - [`Node`] - The non-owning (document, object) view every typed node wraps
//! - [`Value`] / [`Number`] / [`ConstValues`] - The closed value alternatives
//! - [`Children`] - Lazy forward-only ranges over list-backed children
//! - [`Descriptor`], [`Assignment`], [`ReferenceFile`],
//!   [`ObjectDeclarationList`], [`ObjectDeclarationListValue`] - The node catalog
//! - [`DeclarationKeyword`] / [`ValueType`] - Closed keyword sets with
//!   round-tripping spellings
//! - [`Visitor`] - Double dispatch for whole-tree algorithms

pub mod assignment;
pub mod children;
pub mod descriptor;
pub mod errors;
pub mod keyword;
pub mod node;
pub mod object_declaration;
pub mod reference_file;
pub mod value;
pub mod value_type;
pub mod visitor;

pub use assignment::Assignment;
pub use children::{Children, ChildrenIter};
pub use descriptor::{Assignments, Descriptor};
pub use errors::TreeError;
pub use keyword::DeclarationKeyword;
pub use node::Node;
pub use object_declaration::{
    ObjectDeclarationList, ObjectDeclarationListValue, ObjectDeclarationValues,
};
pub use reference_file::ReferenceFile;
pub use value::{ConstValues, ConstValuesIter, Number, Value};
pub use value_type::ValueType;
pub use visitor::Visitor;
