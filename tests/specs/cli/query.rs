//! `pj query` specs
//!
//! Verify permission answers and exit codes.

use crate::prelude::*;
use crate::prelude::assert_eq;

fn query(args: &[&str]) -> std::process::Output {
    let project = Project::empty();
    let contract = project.file("todo.toml", TODO_CONTRACT);
    pj().arg("query").arg(&contract).args(args).output().unwrap()
}

#[test]
fn registered_sender_is_allowed() {
    let output = query(&["editor", "save", "--sends"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "allowed\n");
}

#[test]
fn io_allows_both_directions() {
    for direction in ["--sends", "--receives"] {
        let output = query(&["list", "item-added", direction]);
        assert_eq!(output.status.code(), Some(0), "{direction}");
    }
}

#[test]
fn derived_object_inherits_prototype_assertions() {
    let output = query(&["editor", "item-added", "--receives"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "allowed\n");
}

#[test]
fn unregistered_direction_is_denied() {
    let output = query(&["backend", "save", "--sends"]);

    assert_eq!(output.status.code(), Some(3));
    let stdout = stdout_of(&output);
    assert!(
        stdout.contains("assertion type 'sends' or 'io' not registered"),
        "{stdout}"
    );
    assert!(stdout.contains("'backend'"), "{stdout}");
}

#[test]
fn unknown_object_fails() {
    let output = query(&["ghost", "save", "--sends"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("object 'ghost' is not declared"));
}

#[test]
fn invalid_event_type_fails() {
    let output = query(&["editor", "Save", "--sends"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("upper case"));
}

#[test]
fn help_documents_exit_status() {
    let output = pj().args(["query", "--help"]).output().unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("3 denied"));
}

#[test]
fn direction_is_required() {
    let output = query(&["editor", "save"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("--sends"));
}
