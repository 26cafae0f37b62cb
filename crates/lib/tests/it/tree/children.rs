use automerge::{Automerge, ObjType, ROOT, transaction::Transactable};

use usdj_am::{Assignment, Descriptor, Error, schema::SchemaError};

use crate::helpers;

#[test]
fn test_length_is_captured_at_creation() {
    let doc = helpers::float_scene(None, &[("a", 1.0), ("b", 2.0), ("c", 3.0)]);

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");
    assert_eq!(assignments.len(), 3);
    assert!(!assignments.is_empty());

    // A clone is another handle on the same range, not a cursor.
    let again = assignments.clone();
    assert_eq!(again.len(), 3);
}

#[test]
fn test_iteration_is_ordered_and_restartable() {
    let doc = helpers::float_scene(None, &[("a", 1.0), ("b", 2.0), ("c", 3.0)]);

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");

    let collect = |range: &usdj_am::tree::Assignments<'_>| -> Vec<String> {
        range
            .iter()
            .map(|assignment| {
                assignment
                    .expect("Assignment should project")
                    .get_identifier()
                    .expect("Identifier should read")
            })
            .collect()
    };

    let first_pass = collect(&assignments);
    assert_eq!(first_pass, vec!["a", "b", "c"]);
    let second_pass = collect(&assignments);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_for_loop_over_borrowed_range() {
    let doc = helpers::float_scene(None, &[("a", 1.0), ("b", 2.0)]);

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");

    let mut seen = 0;
    for assignment in &assignments {
        assignment.expect("Assignment should project");
        seen += 1;
    }
    assert_eq!(seen, 2);
}

#[test]
fn test_malformed_element_fails_only_its_own_step() {
    // A scalar wedged between two well-formed assignments.
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    helpers::put_description(&mut tx, &ROOT, None);
    let assignments = tx
        .put_object(ROOT, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    let first = helpers::push_assignment(&mut tx, &assignments, 0, None, "first");
    tx.put(&first, "value", 1.0_f64).expect("Failed to put value");
    tx.insert(&assignments, 1, 42_i64)
        .expect("Failed to insert stray scalar");
    let third = helpers::push_assignment(&mut tx, &assignments, 2, None, "third");
    tx.put(&third, "value", 3.0_f64).expect("Failed to put value");
    tx.commit();

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");
    assert_eq!(assignments.len(), 3);

    let steps: Vec<usdj_am::Result<Assignment<'_>>> = assignments.iter().collect();
    assert_eq!(steps.len(), 3);
    assert!(steps[0].is_ok());
    assert!(steps[2].is_ok());

    let error = steps[1].as_ref().expect_err("The scalar step should fail");
    assert!(error.is_shape_mismatch());
    assert_eq!(
        error.to_string(),
        "Assignment expects a map of 4 entries, found a scalar"
    );
}

#[test]
fn test_wrong_shape_element_matches_direct_construction() {
    // The range's per-step validation is the node's own construction check.
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    helpers::put_description(&mut tx, &ROOT, None);
    let assignments = tx
        .put_object(ROOT, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    let stub = tx
        .insert_object(&assignments, 0, ObjType::Map)
        .expect("Failed to insert map");
    tx.put(&stub, "identifier", "lonely")
        .expect("Failed to put identifier");
    tx.commit();

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let range_error = root
        .get_assignments()
        .expect("Assignments should read")
        .get(0)
        .expect_err("A one-key map is not an assignment");
    let direct_error =
        Assignment::new(&doc, stub).expect_err("Direct construction should fail the same way");
    assert_eq!(range_error.to_string(), direct_error.to_string());
}

#[test]
fn test_get_out_of_range() {
    let doc = helpers::float_scene(None, &[("only", 1.0)]);

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");

    let error = assignments.get(7).expect_err("Index 7 is out of range");
    match error {
        Error::Schema(SchemaError::MissingProperty {
            node_type,
            property,
        }) => {
            assert_eq!(node_type, "Assignment");
            assert_eq!(property, "[7]");
        }
        other => panic!("Expected a missing property error, got {other:?}"),
    }
}

#[test]
fn test_iterator_reports_remaining_length() {
    let doc = helpers::float_scene(None, &[("a", 1.0), ("b", 2.0), ("c", 3.0)]);

    let root = Descriptor::new(&doc, ROOT).expect("Root should project");
    let assignments = root.get_assignments().expect("Assignments should read");

    let mut iter = assignments.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 1);
    iter.next();
    assert_eq!(iter.len(), 0);
    assert!(iter.next().is_none());
    // Fused: exhausted stays exhausted.
    assert!(iter.next().is_none());
}
