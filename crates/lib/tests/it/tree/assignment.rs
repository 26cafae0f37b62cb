use automerge::{Automerge, ObjType, ROOT, transaction::Transactable};

use usdj_am::{Assignment, DeclarationKeyword, Descriptor, Error, ValueType, tree::TreeError};

use crate::helpers;

fn single_assignment_doc(keyword: Option<&str>) -> Automerge {
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    helpers::put_description(&mut tx, &ROOT, None);
    let assignments = tx
        .put_object(ROOT, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    let assignment = helpers::push_assignment(&mut tx, &assignments, 0, keyword, "size");
    tx.put(&assignment, "value", 4.0_f64)
        .expect("Failed to put value");
    tx.commit();
    doc
}

fn first_assignment(doc: &Automerge) -> Assignment<'_> {
    let root = Descriptor::new(doc, ROOT).expect("Root should project");
    root.get_assignments()
        .expect("Assignments should read")
        .get(0)
        .expect("First assignment should project")
}

#[test]
fn test_reads_keyword_identifier_and_value() {
    let doc = single_assignment_doc(Some("uniform"));
    let assignment = first_assignment(&doc);

    assert_eq!(
        assignment.get_keyword().expect("Keyword should read"),
        Some(DeclarationKeyword::Uniform)
    );
    assert_eq!(
        assignment.get_identifier().expect("Identifier should read"),
        "size"
    );
    let value = assignment.get_value().expect("Value should read");
    assert_eq!(
        value
            .as_number()
            .expect("Value should be numeric")
            .as_f64(),
        Some(4.0)
    );
}

#[test]
fn test_null_keyword_reads_as_none() {
    let doc = single_assignment_doc(None);
    let assignment = first_assignment(&doc);
    assert_eq!(assignment.get_keyword().expect("Keyword should read"), None);
}

#[test]
fn test_misspelled_keyword_fails() {
    // Spellings are matched exactly; capitalization is a different word.
    let doc = single_assignment_doc(Some("Uniform"));
    let assignment = first_assignment(&doc);

    let error = assignment
        .get_keyword()
        .expect_err("An unknown spelling should not parse");
    assert!(error.is_spelling_error());
    match error {
        Error::Tree(TreeError::UnknownSpelling { keyword, spelling }) => {
            assert_eq!(keyword, "DeclarationKeyword");
            assert_eq!(spelling, "Uniform");
        }
        other => panic!("Expected a spelling error, got {other:?}"),
    }
}

#[test]
fn test_type_tag_is_fixed() {
    let doc = single_assignment_doc(None);
    let assignment = first_assignment(&doc);
    assert_eq!(assignment.get_type(), ValueType::Assignment);
    assert_eq!(assignment.get_type().as_str(), "assignment");
}

#[test]
fn test_rejects_map_missing_a_slot() {
    // Three of the four assignment keys: the shape check counts entries.
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    let partial = tx
        .put_object(ROOT, "partial", ObjType::Map)
        .expect("Failed to create map");
    tx.put(&partial, "type", "assignment")
        .expect("Failed to put type");
    tx.put(&partial, "keyword", automerge::ScalarValue::Null)
        .expect("Failed to put keyword");
    tx.put(&partial, "identifier", "size")
        .expect("Failed to put identifier");
    tx.commit();

    let error = Assignment::new(&doc, partial).expect_err("Projection should fail");
    assert!(error.is_shape_mismatch());
    assert_eq!(
        error.to_string(),
        "Assignment expects a map of 4 entries, found a map of 3 entries"
    );
}
