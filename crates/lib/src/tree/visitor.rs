//! Double dispatch over the closed node set.

use crate::tree::{
    Assignment, Descriptor, ObjectDeclarationList, ObjectDeclarationListValue, ReferenceFile,
};

/// Per-type dispatch targets for whole-tree algorithms.
///
/// The node set is closed and every visitor handles every node type, so none
/// of the methods has a default body: adding a node type to the catalog grows
/// this trait and breaks every implementation at compile time. Nodes never
/// know concrete algorithms; a node's
/// `accept` calls exactly the method declared for its type, and the visitor
/// drives any recursion through the node's own accessors.
///
/// Methods are fallible so a traversal can propagate projection failures out
/// of the walk instead of carrying them in side-channel state.
pub trait Visitor<'a> {
    fn visit_assignment(&mut self, node: &Assignment<'a>) -> crate::Result<()>;

    fn visit_descriptor(&mut self, node: &Descriptor<'a>) -> crate::Result<()>;

    fn visit_object_declaration_list(
        &mut self,
        node: &ObjectDeclarationList<'a>,
    ) -> crate::Result<()>;

    fn visit_object_declaration_list_value(
        &mut self,
        node: &ObjectDeclarationListValue<'a>,
    ) -> crate::Result<()>;

    fn visit_reference_file(&mut self, node: &ReferenceFile<'a>) -> crate::Result<()>;
}
