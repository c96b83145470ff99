//! Integration tests for bundle writing.
//!
//! These cover directory creation, overwrite behavior, atomic replacement
//! and path validation.

mod helpers;

use std::fs;

use helpers::Tree;
use nsb_bundler::output::writer::write_bundle_to;
use nsb_bundler::{BundleOptions, Error};
use tempfile::TempDir;

#[test]
fn test_write_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("dist/js/bundle.js");

    let written = write_bundle_to("A = {};", &target, false).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "A = {};");
    assert!(written.is_absolute());
    assert!(written.ends_with("dist/js/bundle.js"));
}

#[test]
fn test_write_refuses_existing_file_without_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("bundle.js");
    fs::write(&target, "old").unwrap();

    let err = write_bundle_to("new", &target, false).unwrap_err();

    assert!(matches!(err, Error::OutputExists(_)));
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");
}

#[test]
fn test_write_overwrites_when_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("bundle.js");
    fs::write(&target, "old").unwrap();

    write_bundle_to("new", &target, true).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "new");
}

#[test]
fn test_write_leaves_no_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("bundle.js");

    write_bundle_to("A = {};", &target, false).unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, ["bundle.js"]);
}

#[test]
fn test_write_rejects_directory_target() {
    let temp_dir = TempDir::new().unwrap();

    let err = write_bundle_to("A = {};", temp_dir.path(), true).unwrap_err();

    assert!(matches!(err, Error::InvalidOutputPath(_)));
}

#[test]
fn test_write_empty_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("empty.js");

    write_bundle_to("", &target, false).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}

#[test]
fn test_result_write_to() {
    let tree = Tree::new(&[("a.js", "A = {};"), ("b.js", "B = A;")]);
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("out/bundle.js");

    let result = BundleOptions::new(tree.root()).build().unwrap();
    result.write_to(&target, false).unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "A = {};\nB = A;");

    // second write needs overwrite
    assert!(result.write_to(&target, false).is_err());
    result.write_to_force(&target).unwrap();
}
