use crate::common::file::{FileSpec, write_file, write_version};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn sync_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// `notes.txt` at its third revision, with the first two kept under
/// `_versions/`.
#[fixture]
pub fn versioned_sync_root(sync_root: TempDir) -> TempDir {
    write_version(sync_root.path(), "notes.txt", 1, "alpha\nbeta");
    write_version(sync_root.path(), "notes.txt", 2, "alpha\nbeta\ngamma");
    write_file(FileSpec::new(
        sync_root.path().join("notes.txt"),
        "alpha\nBETA\ngamma\ndelta".to_string(),
    ));

    sync_root
}

/// One document with a conflict copy next to it, and one conflict copy whose
/// original is gone.
#[fixture]
pub fn conflicted_sync_root(sync_root: TempDir) -> TempDir {
    write_file(FileSpec::new(
        sync_root.path().join("docs").join("plan.md"),
        "# Plan\n\n- ship sync\n- ship gallery".to_string(),
    ));
    write_file(FileSpec::new(
        sync_root
            .path()
            .join("docs")
            .join("plan (conflict 2026-02-19).md"),
        "# Plan\n\n- ship sync\n- ship albums".to_string(),
    ));
    write_file(FileSpec::new(
        sync_root.path().join("captions (conflict 2026-02-18).txt"),
        "sunset over the bay".to_string(),
    ));

    sync_root
}

pub fn run_linediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("linediff").expect("Failed to find linediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("LINEDIFF_ROOT");
    cmd.env_remove("LINEDIFF_THRESHOLD");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(mut cmd: Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
