//! End-to-end tests for the cardbox binary.
//!
//! The flashcard service is never running here; extraction and persistence
//! must work regardless, with submission skipped.

use assert_cmd::Command;
use predicates::prelude::*;

/// A port nothing listens on, so the service is always unreachable.
const UNREACHABLE_SERVICE: &str = "http://127.0.0.1:9";

fn cardbox() -> Command {
    Command::cargo_bin("cardbox").unwrap()
}

#[test]
fn rejects_unsupported_extension_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    // The file does not exist; selection must fail before any I/O.
    cardbox()
        .current_dir(dir.path())
        .arg("notes.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported notes format"));
}

#[test]
fn fails_on_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    cardbox()
        .current_dir(dir.path())
        .args(["notes.txt", "--service-url", UNREACHABLE_SERVICE])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to extract entries"));
}

#[test]
fn writes_remaining_questions_when_service_is_down() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("notes.txt"),
        "What special python method implements addition?\n\
         \t__add__\n\
         This line contains nothing.\n",
    )
    .unwrap();

    let remaining = dir.path().join("remaining.txt");
    cardbox()
        .current_dir(dir.path())
        .arg("notes.txt")
        .arg("--remaining")
        .arg(&remaining)
        .args(["--service-url", UNREACHABLE_SERVICE])
        .assert()
        .success();

    let written = std::fs::read_to_string(&remaining).unwrap();
    assert_eq!(written, "This line contains nothing.\n");
}

#[test]
fn extracts_questions_from_html_notes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("notes.html"),
        "<html><body>\
         <p style=\"color: red\">Who said it?</p>\
         <ul><li>Steve</li></ul>\
         <p>Final question</p>\
         </body></html>",
    )
    .unwrap();

    let remaining = dir.path().join("remaining.txt");
    cardbox()
        .current_dir(dir.path())
        .arg("notes.html")
        .arg("--remaining")
        .arg(&remaining)
        .args(["--service-url", UNREACHABLE_SERVICE])
        .assert()
        .success();

    let written = std::fs::read_to_string(&remaining).unwrap();
    assert_eq!(written, "<p>Final question</p>\n");
}
