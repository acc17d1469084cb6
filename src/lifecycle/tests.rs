use super::*;
use crate::encoding::{LineEnding, TextEncoding};
use std::fs;
use tempfile::tempdir;

const INITIAL_LINES: [&str; 2] = ["File number 2", "A short story..."];

fn lf_options() -> WriterOptions {
    WriterOptions::new()
        .encoding(TextEncoding::Utf8)
        .newline(LineEnding::Lf)
}

#[test]
fn test_ensure_created_writes_initial_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.txt");

    let created = ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap();
    assert!(created);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "File number 2\nA short story...\n"
    );
}

#[test]
fn test_ensure_created_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.txt");

    assert!(ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap());
    let after_first = fs::read_to_string(&path).unwrap();

    // A second call must not duplicate the initial lines
    assert!(!ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_ensure_created_leaves_existing_content_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.txt");
    fs::write(&path, "hand-edited\n").unwrap();

    assert!(!ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "hand-edited\n");
}

#[test]
fn test_append_line_extends_created_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.txt");

    ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap();
    let appended = append_line(&path, "X", lf_options()).unwrap();
    assert!(appended);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "File number 2\nA short story...\nX\n"
    );
}

#[test]
fn test_append_line_to_missing_file_is_a_noop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let appended = append_line(&path, "X", lf_options()).unwrap();
    assert!(!appended);
    assert!(!path.exists());
}

#[test]
fn test_delete_removes_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doomed.txt");
    fs::write(&path, "bye").unwrap();

    assert!(delete(&path).unwrap());
    assert!(!path.exists());
}

#[test]
fn test_delete_of_absent_path_is_a_noop() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never-existed.txt");

    assert!(!delete(&path).unwrap());
}

#[test]
fn test_delete_then_recreate_leaves_no_residue() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("second.txt");

    ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap();
    append_line(&path, "Appended some text here", lf_options()).unwrap();

    delete(&path).unwrap();
    ensure_created(&path, &INITIAL_LINES, lf_options()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "File number 2\nA short story...\n"
    );
}
