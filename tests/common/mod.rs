#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn lounge_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lounge").unwrap();
    cmd.env_remove("LOUNGE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A fresh, initialized lounge in a temp directory
pub fn init_lounge() -> TempDir {
    let temp = TempDir::new().unwrap();
    lounge_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run a lounge command from inside `root`
pub fn lounge_in(root: &Path) -> Command {
    let mut cmd = lounge_cmd();
    cmd.current_dir(root);
    cmd
}
