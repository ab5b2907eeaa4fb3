use std::borrow::Cow;
use std::fs;

use skeletons::bundle::TemplateBundle;
use skeletons::error::Error;
use skeletons::fs::OsFilesystem;
use skeletons::guard::{ensure_absent, ensure_output_dir};
use tempfile::TempDir;

const CONFIG: &str = "hugo.toml";

fn bundle() -> TemplateBundle {
    TemplateBundle::from_files(
        "site",
        vec![
            ("content/.gitkeep", Cow::Borrowed(&b""[..])),
            ("layouts/partials/.gitkeep", Cow::Borrowed(&b""[..])),
        ],
    )
}

#[test]
fn test_missing_and_empty_destinations_are_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let fs = OsFilesystem::new();

    assert!(ensure_output_dir(&fs, &temp_dir.path().join("new"), &bundle(), CONFIG, false).is_ok());
    assert!(ensure_output_dir(&fs, temp_dir.path(), &bundle(), CONFIG, false).is_ok());
}

#[test]
fn test_file_destination() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("site");
    fs::write(&file, "not a dir").unwrap();

    let result = ensure_output_dir(&OsFilesystem::new(), &file, &bundle(), CONFIG, true);
    assert!(matches!(result, Err(Error::NotADirectoryError { .. })));
}

#[test]
fn test_non_empty_without_force() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "hi").unwrap();

    match ensure_output_dir(&OsFilesystem::new(), temp_dir.path(), &bundle(), CONFIG, false) {
        Err(err @ Error::AlreadyExistsError { .. }) => {
            assert!(err.to_string().ends_with("already exists and is not empty. See --force."))
        }
        other => panic!("Expected AlreadyExistsError, got {other:?}"),
    }
}

#[test]
fn test_non_empty_with_force() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "hi").unwrap();

    assert!(ensure_output_dir(&OsFilesystem::new(), temp_dir.path(), &bundle(), CONFIG, true).is_ok());
}

#[test]
fn test_force_collides_with_top_level_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("content")).unwrap();

    match ensure_output_dir(&OsFilesystem::new(), temp_dir.path(), &bundle(), CONFIG, true) {
        Err(Error::CollisionError { path }) => assert!(path.ends_with("content")),
        other => panic!("Expected CollisionError, got {other:?}"),
    }
}

#[test]
fn test_force_collides_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG), "title = 'x'").unwrap();

    match ensure_output_dir(&OsFilesystem::new(), temp_dir.path(), &bundle(), CONFIG, true) {
        Err(Error::CollisionError { path }) => assert!(path.ends_with(CONFIG)),
        other => panic!("Expected CollisionError, got {other:?}"),
    }
}

#[test]
fn test_force_ignores_nested_bundle_dirs() {
    let temp_dir = TempDir::new().unwrap();
    // Only top-level names are checked.
    fs::create_dir(temp_dir.path().join("partials")).unwrap();

    assert!(ensure_output_dir(&OsFilesystem::new(), temp_dir.path(), &bundle(), CONFIG, true).is_ok());
}

#[test]
fn test_ensure_absent() {
    let temp_dir = TempDir::new().unwrap();
    let fs = OsFilesystem::new();

    assert!(ensure_absent(&fs, &temp_dir.path().join("theme")).is_ok());
    assert!(matches!(ensure_absent(&fs, temp_dir.path()), Err(Error::AlreadyExistsError { .. })));
}
