//! `pj check` specs
//!
//! Verify a contract is instantiated and its registrations listed.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn check_lists_registrations_by_event_type() {
    let project = Project::empty();
    let contract = project.file("todo.toml", TODO_CONTRACT);

    let output = pj().arg("check").arg(&contract).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "item-added\tlist\tio\nsave\teditor\tsends\nsave\tbackend\treceives\n"
    );
}

#[test]
fn check_empty_contract_prints_nothing() {
    let project = Project::empty();
    let contract = project.file("empty.toml", "");

    let output = pj().arg("check").arg(&contract).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn check_rejects_duplicate_registration() {
    let project = Project::empty();
    let contract = project.file(
        "dup.toml",
        r#"
[objects.list]

[[assert]]
event = "ping"
object = "list"
type = "sends"

[[assert]]
event = "ping"
object = "list"
type = "io"
"#,
    );

    let output = pj().arg("check").arg(&contract).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("error: invalid contract"), "{stderr}");
    assert!(stderr.contains("already registered"), "{stderr}");
}

#[test]
fn check_rejects_upper_case_event_type() {
    let project = Project::empty();
    let contract = project.file(
        "upper.toml",
        r#"
[objects.list]

[[assert]]
event = "Ping"
object = "list"
type = "sends"
"#,
    );

    let output = pj().arg("check").arg(&contract).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("upper case"));
}

#[test]
fn check_missing_file_fails() {
    let project = Project::empty();

    let output = pj()
        .arg("check")
        .arg(project.path().join("absent.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Check the file path"));
}
