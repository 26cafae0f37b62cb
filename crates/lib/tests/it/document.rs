use usdj_am::{Descriptor, Document};

use crate::helpers;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("scene.am");

    let scene = helpers::float_scene(Some("round trip"), &[("radius", 2.5)]);
    let mut document = Document::from(scene);
    document.save(&path).expect("Failed to save document");

    let reloaded = Document::load(&path).expect("Failed to load document");
    let root = Descriptor::new(reloaded.automerge(), reloaded.root())
        .expect("Failed to project root descriptor");
    assert_eq!(
        root.get_description().expect("Failed to read description"),
        Some("round trip".to_string())
    );
    let assignments = root
        .get_assignments()
        .expect("Failed to read assignments");
    assert_eq!(assignments.len(), 1);
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("does-not-exist.am");

    let error = Document::load(&path).expect_err("Load should fail");
    assert!(error.is_io_error());
    assert!(error.to_string().contains("does-not-exist.am"));
}

#[test]
fn test_load_rejects_non_automerge_bytes() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("garbage.am");
    std::fs::write(&path, b"usda 1.0, but not automerge").expect("Failed to write file");

    let error = Document::load(&path).expect_err("Load should fail");
    assert!(!error.is_io_error());
    assert_eq!(error.module(), "document");
}

#[test]
fn test_from_bytes_round_trip() {
    let scene = helpers::float_scene(None, &[("radius", 2.5), ("height", 4.0)]);
    let mut document = Document::from(scene);
    let bytes = document.to_bytes();

    let reloaded = Document::from_bytes(&bytes).expect("Failed to load from bytes");
    let root = Descriptor::new(reloaded.automerge(), reloaded.root())
        .expect("Failed to project root descriptor");
    assert_eq!(root.get_description().expect("Failed to read description"), None);
    assert_eq!(
        root.get_assignments()
            .expect("Failed to read assignments")
            .len(),
        2
    );
}
