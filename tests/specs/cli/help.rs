//! Help and usage specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn help_lists_subcommands() {
    let output = pj().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for sub in ["check", "query", "post"] {
        assert!(stdout.contains(sub), "missing {sub} in:\n{stdout}");
    }
}

#[test]
fn no_subcommand_is_a_usage_error() {
    let output = pj().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
