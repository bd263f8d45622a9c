use assert_cmd::prelude::*;
use command_extra::CommandExtra;
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::{tempdir, TempDir};

/// Path of the lockfile the command sees by default.
pub fn lockfile_path(workspace: &Path) -> PathBuf {
    workspace.join("yarn.lock")
}

/// Read back the lockfile of a workspace made by [`yarn_dedupe_with_temp_cwd`].
pub fn read_lockfile(workspace: &Path) -> String {
    fs::read_to_string(lockfile_path(workspace)).expect("read yarn.lock")
}

/// Create a `yarn-dedupe` command that runs in a fresh temporary workspace.
///
/// When `lockfile` is given, it is written to `yarn.lock` in the workspace.
pub fn yarn_dedupe_with_temp_cwd(lockfile: Option<&str>) -> (Command, TempDir, PathBuf) {
    let root = tempdir().expect("create temporary directory");
    let workspace = root.path().join("workspace");
    fs::create_dir(&workspace).expect("create temporary workspace for yarn-dedupe");
    if let Some(lockfile) = lockfile {
        fs::write(lockfile_path(&workspace), lockfile).expect("write to yarn.lock");
    }
    let command = Command::cargo_bin("yarn-dedupe")
        .expect("find the yarn-dedupe binary")
        .with_current_dir(&workspace);
    (command, root, workspace)
}
