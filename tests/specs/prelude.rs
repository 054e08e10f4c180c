//! Shared helpers for CLI specs

#![allow(dead_code)]

pub use assert_cmd::Command;
pub use similar_asserts::assert_eq;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A todo-list contract used across specs
pub const TODO_CONTRACT: &str = r#"
[objects.list]

[objects.editor]
prototype = "list"

[objects.backend]
kind = "server"

[[assert]]
event = "item-added"
object = "list"
type = "io"

[[assert]]
event = "save"
object = "editor"
type = "sends"

[[assert]]
event = "save"
object = "backend"
type = "receives"
"#;

/// Temporary directory holding contract files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// The pj binary with logging quietened
pub fn pj() -> Command {
    let mut cmd = Command::cargo_bin("pj").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
