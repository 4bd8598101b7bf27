use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{create_dir_all, read_to_string, write};
use tempfile::tempdir;

fn records_index() -> Command {
    Command::cargo_bin("records-index").expect("Binary exists")
}

#[test]
fn cli_happy_flow_writes_records_index() {
    let program_root = tempdir().unwrap();
    let records = program_root.path().join("records");
    create_dir_all(records.join("b")).unwrap();
    write(records.join("a.pdf"), b"%PDF").unwrap();
    write(records.join("b/B.PDF"), b"%PDF").unwrap();
    write(records.join("b/notes.txt"), b"notes").unwrap();

    records_index()
        .current_dir(program_root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html").and(predicate::str::contains("2 entries")));

    let html = read_to_string(records.join("index.html")).unwrap();
    assert!(html.contains("<a href=\"a.pdf\" download>Download</a>"));
    assert!(html.contains("<a href=\"b/B.PDF\" download>Download</a>"));
    assert!(!html.contains("notes.txt"));
}

#[test]
fn cli_missing_records_dir_fails_with_exit_code_one() {
    let program_root = tempdir().unwrap();

    records_index()
        .current_dir(program_root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("root not found or not a directory"));

    assert!(!program_root.path().join("records").exists());
    assert!(!program_root.path().join("index.html").exists());
}

#[test]
fn cli_honours_config_file_in_program_root() {
    let program_root = tempdir().unwrap();
    let docs = program_root.path().join("docs");
    create_dir_all(&docs).unwrap();
    write(docs.join("guide.epub"), b"epub").unwrap();
    write(docs.join("ignored.pdf"), b"%PDF").unwrap();
    write(
        program_root.path().join("records-index.yaml"),
        "root: docs\nextension: epub\noutput: list.html\ntitle: Library\n",
    )
    .unwrap();

    records_index()
        .current_dir(program_root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entry"));

    let html = read_to_string(docs.join("list.html")).unwrap();
    assert!(html.contains("<h1>Library</h1>"));
    assert!(html.contains("guide.epub"));
    assert!(!html.contains("ignored.pdf"));
    assert!(!docs.join("index.html").exists());
}

#[test]
fn cli_invalid_config_file_fails() {
    let program_root = tempdir().unwrap();
    create_dir_all(program_root.path().join("records")).unwrap();
    write(program_root.path().join("records-index.yaml"), "root: [:::").unwrap();

    records_index()
        .current_dir(program_root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse"));

    assert!(!program_root.path().join("records/index.html").exists());
}

#[test]
fn cli_rejects_unknown_arguments() {
    records_index().arg("--root").arg("x").assert().failure();
}

#[test]
fn cli_prints_version() {
    records_index()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("records-index"));
}
