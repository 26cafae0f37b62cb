use automerge::{Automerge, ObjId, ObjType, ROOT, ScalarValue, transaction::Transactable};

// ==========================
// SCENE DOCUMENT BUILDERS
// ==========================
// These build Automerge documents shaped the way the upstream USDA-to-JSON
// pipeline stores them, so the projection layer has something real to read.

/// Creates a document whose root object is a descriptor with an empty
/// assignment list.
///
/// `description: None` is stored as an explicit null, matching the grammar.
pub fn empty_descriptor_doc(description: Option<&str>) -> Automerge {
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    put_description(&mut tx, &ROOT, description);
    tx.put_object(ROOT, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    tx.commit();
    doc
}

/// Creates a document whose root descriptor binds each `(identifier, value)`
/// pair as a keyword-less assignment with a float value.
pub fn float_scene(description: Option<&str>, floats: &[(&str, f64)]) -> Automerge {
    let mut doc = Automerge::new();
    let mut tx = doc.transaction();
    put_description(&mut tx, &ROOT, description);
    let assignments = tx
        .put_object(ROOT, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    for (index, (identifier, value)) in floats.iter().enumerate() {
        let assignment = push_assignment(&mut tx, &assignments, index, None, identifier);
        tx.put(&assignment, "value", *value)
            .expect("Failed to put assignment value");
    }
    tx.commit();
    doc
}

/// Writes the descriptor `description` slot: a string, or an explicit null.
pub fn put_description<T: Transactable>(tx: &mut T, obj: &ObjId, description: Option<&str>) {
    match description {
        Some(text) => tx.put(obj, "description", text),
        None => tx.put(obj, "description", ScalarValue::Null),
    }
    .expect("Failed to put description");
}

/// Appends an assignment map to `list` and returns its object id.
///
/// The fixed slots (`type`, `keyword`, `identifier`) are filled; the caller
/// fills `value` so the test controls what the binding holds.
pub fn push_assignment<T: Transactable>(
    tx: &mut T,
    list: &ObjId,
    index: usize,
    keyword: Option<&str>,
    identifier: &str,
) -> ObjId {
    let assignment = tx
        .insert_object(list, index, ObjType::Map)
        .expect("Failed to insert assignment map");
    tx.put(&assignment, "type", "assignment")
        .expect("Failed to put assignment type");
    match keyword {
        Some(text) => tx.put(&assignment, "keyword", text),
        None => tx.put(&assignment, "keyword", ScalarValue::Null),
    }
    .expect("Failed to put assignment keyword");
    tx.put(&assignment, "identifier", identifier)
        .expect("Failed to put assignment identifier");
    assignment
}

/// Fills `obj` as a reference file map with an explicitly null descriptor.
pub fn fill_reference_file<T: Transactable>(tx: &mut T, obj: &ObjId, src: &str) {
    tx.put(obj, "type", "externalReferenceSrc")
        .expect("Failed to put reference type");
    tx.put(obj, "src", src).expect("Failed to put reference src");
    tx.put(obj, "descriptor", ScalarValue::Null)
        .expect("Failed to put reference descriptor");
}

/// Creates an empty descriptor map under `parent[key]` and returns its id.
pub fn put_descriptor<T: Transactable>(
    tx: &mut T,
    parent: &ObjId,
    key: &str,
    description: Option<&str>,
) -> ObjId {
    let descriptor = tx
        .put_object(parent, key, ObjType::Map)
        .expect("Failed to create descriptor map");
    put_description(tx, &descriptor, description);
    tx.put_object(&descriptor, "assignments", ObjType::List)
        .expect("Failed to create assignments list");
    descriptor
}

/// Inserts a list of floats under `parent[key]` and returns its id.
pub fn put_float_list<T: Transactable>(
    tx: &mut T,
    parent: &ObjId,
    key: &str,
    floats: &[f64],
) -> ObjId {
    let list = tx
        .put_object(parent, key, ObjType::List)
        .expect("Failed to create value list");
    for (index, value) in floats.iter().enumerate() {
        tx.insert(&list, index, *value)
            .expect("Failed to insert float");
    }
    list
}
